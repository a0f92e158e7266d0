// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Visibility: threshold-based visibility tracking for scrolled items.
//!
//! This crate answers "which items are on screen, and how much of each?" for
//! scroll views and lists. A host reports a container (viewport) rectangle
//! and the rectangles of the items it has laid out; the tracker turns those
//! reports into discrete transitions:
//!
//! - [`VisibilityChange::Shown`]`(t)` the first time an item's overlap with
//!   the container reaches threshold `t`,
//! - [`VisibilityChange::Hidden`]`(t)` when it drops back below `t`,
//! - [`VisibilityChange::EXIT`] (`Hidden(0.0)`) once when a visible item leaves
//!   the container entirely.
//!
//! It also keeps the visible items sorted along the scroll axis, so the
//! topmost and bottommost visible items are always at hand (for example to
//! drive a "current section" header or to load more content near the end).
//!
//! The core pieces are:
//!
//! - [`is_roughly_visible`] and [`overlap_ratio`]: pure geometry on
//!   [`kurbo::Rect`].
//! - [`Thresholds`]: a validated, ordered set of ratios in `(0, 1]`.
//! - [`VisibilityTracker`]: the per-item state machine and sorted order.
//!   Reports return their transitions directly.
//! - [`VisibilityObserver`]: a tracker paired with a callback, for hosts that
//!   prefer push-style delivery.
//!
//! This crate deliberately does **not** observe scrolling, schedule updates,
//! or convert between coordinate spaces. Host frameworks are responsible for:
//!
//! - Calling [`VisibilityTracker::report_container_bounds`] once per layout pass.
//! - Calling [`VisibilityTracker::report_item_bounds`] for every materialized
//!   item in the same pass, with rectangles in the container's coordinate space.
//! - Optionally discarding records for items that were unmaterialized without
//!   a final report, via [`VisibilityTracker::remove_item`] or
//!   [`VisibilityTracker::retain_items`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_visibility::{Thresholds, VisibilityChange, VisibilityTracker};
//!
//! let mut tracker = VisibilityTracker::new(Thresholds::new([0.1, 0.5]).unwrap());
//! tracker.report_container_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! // 30% of item 1 overlaps the container.
//! let changes = tracker.report_item_bounds(&1, Rect::new(0.0, 70.0, 100.0, 170.0));
//! assert_eq!(&changes[..], &[VisibilityChange::Shown(0.1)]);
//!
//! // Reporting the same bounds again changes nothing.
//! assert!(tracker.report_item_bounds(&1, Rect::new(0.0, 70.0, 100.0, 170.0)).is_empty());
//!
//! // Scrolled up: now fully inside.
//! let changes = tracker.report_item_bounds(&1, Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(&changes[..], &[VisibilityChange::Shown(0.5)]);
//!
//! // Scrolled out: a single exit, regardless of how many thresholds were active.
//! let changes = tracker.report_item_bounds(&1, Rect::new(0.0, -200.0, 100.0, -100.0));
//! assert_eq!(&changes[..], &[VisibilityChange::EXIT]);
//! ```
//!
//! ## Visibility gate
//!
//! Before any ratio is considered, an item must be *roughly visible*: the
//! container must contain its top-left or bottom-right corner. Items that
//! are larger than the container and straddle it on both sides are therefore
//! treated as not visible. Hosts whose items can exceed the viewport should
//! keep this in mind.
//!
//! ## Threading
//!
//! Trackers are plain values with no interior mutability. All reports and
//! callbacks run synchronously on the caller's thread. Callbacks receive a
//! shared reference to the tracker and so cannot report reentrantly.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `tracing`: emits `tracing` events for transitions, container updates,
//!   and removals.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod logging;

mod axis;
mod change;
pub mod observer;
mod overlap;
mod threshold;
mod tracker;

pub use axis::ScrollAxis;
pub use change::{Transitions, VisibilityChange};
pub use observer::VisibilityObserver;
pub use overlap::{is_roughly_visible, overlap_ratio};
pub use threshold::{ThresholdError, Thresholds};
pub use tracker::VisibilityTracker;
