// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback delivery on top of [`VisibilityTracker`].
//!
//! ## Usage
//!
//! 1) Build a [`VisibilityObserver`] from a threshold set and a callback.
//! 2) Once per layout pass, call [`VisibilityObserver::report_container_bounds`].
//! 3) Then call [`VisibilityObserver::report_item_bounds`] for every materialized item.
//!    The callback runs once per transition, in threshold order, before the call returns.
//!
//! The callback receives a shared reference to the tracker so it can query
//! the first/last visible items. It cannot mutate the tracker; reentrant
//! reports from inside the callback are rejected by the borrow checker.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_visibility::{
//!     Thresholds, VisibilityChange, VisibilityObserver, VisibilityTracker,
//! };
//!
//! let mut log = Vec::new();
//! let thresholds = Thresholds::new([0.5]).unwrap();
//! let mut observer = VisibilityObserver::new(
//!     thresholds,
//!     |id: &u32, change: VisibilityChange, tracker: &VisibilityTracker<u32>| {
//!         log.push((*id, change, tracker.top_visible_item().copied()));
//!     },
//! );
//!
//! observer.report_container_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
//! observer.report_item_bounds(&7, Rect::new(0.0, 0.0, 100.0, 100.0));
//! observer.report_item_bounds(&7, Rect::new(200.0, 0.0, 300.0, 100.0));
//!
//! assert_eq!(
//!     log,
//!     vec![
//!         (7, VisibilityChange::Shown(0.5), Some(7)),
//!         (7, VisibilityChange::EXIT, None),
//!     ]
//! );
//! ```

use core::fmt;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

use crate::change::VisibilityChange;
use crate::threshold::Thresholds;
use crate::tracker::VisibilityTracker;

/// A [`VisibilityTracker`] that delivers its transitions to a callback.
///
/// The callback is invoked as `on_change(id, change, tracker)`, where
/// `tracker` reflects the state after the whole report has been applied.
pub struct VisibilityObserver<K, F>
where
    K: Clone + Eq + Hash + Debug,
    F: FnMut(&K, VisibilityChange, &VisibilityTracker<K>),
{
    tracker: VisibilityTracker<K>,
    on_change: F,
}

impl<K, F> Debug for VisibilityObserver<K, F>
where
    K: Clone + Eq + Hash + Debug,
    F: FnMut(&K, VisibilityChange, &VisibilityTracker<K>),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl<K, F> VisibilityObserver<K, F>
where
    K: Clone + Eq + Hash + Debug,
    F: FnMut(&K, VisibilityChange, &VisibilityTracker<K>),
{
    /// Creates an observer with a fresh vertical tracker.
    #[must_use]
    pub fn new(thresholds: Thresholds, on_change: F) -> Self {
        Self::with_tracker(VisibilityTracker::new(thresholds), on_change)
    }

    /// Wraps an existing tracker.
    #[must_use]
    pub fn with_tracker(tracker: VisibilityTracker<K>, on_change: F) -> Self {
        Self { tracker, on_change }
    }

    /// Returns the underlying tracker for queries.
    #[must_use]
    pub fn tracker(&self) -> &VisibilityTracker<K> {
        &self.tracker
    }

    /// Splits the observer back into its tracker and callback.
    pub fn into_parts(self) -> (VisibilityTracker<K>, F) {
        (self.tracker, self.on_change)
    }

    /// See [`VisibilityTracker::report_container_bounds`].
    pub fn report_container_bounds(&mut self, bounds: Rect) {
        self.tracker.report_container_bounds(bounds);
    }

    /// Reports an item's rectangle and delivers the resulting transitions.
    ///
    /// Returns the number of transitions delivered.
    pub fn report_item_bounds(&mut self, id: &K, bounds: Rect) -> usize {
        let changes = self.tracker.report_item_bounds(id, bounds);
        for change in &changes {
            (self.on_change)(id, *change, &self.tracker);
        }
        changes.len()
    }

    /// Removes an item, delivering [`VisibilityChange::EXIT`] if it was visible.
    ///
    /// Returns `true` if a record was removed.
    pub fn remove_item(&mut self, id: &K) -> bool {
        match self.tracker.remove_item(id) {
            Some(change) => {
                (self.on_change)(id, change, &self.tracker);
                true
            }
            None => false,
        }
    }

    /// Removes every visible item for which `keep` returns `false`,
    /// delivering [`VisibilityChange::EXIT`] for each, in visible order.
    ///
    /// Returns the number of items removed.
    pub fn retain_items<P>(&mut self, keep: P) -> usize
    where
        P: FnMut(&K) -> bool,
    {
        let removed = self.tracker.retain_items(keep);
        for id in &removed {
            (self.on_change)(id, VisibilityChange::EXIT, &self.tracker);
        }
        removed.len()
    }

    /// See [`VisibilityTracker::clear`]. No transitions are delivered.
    pub fn clear(&mut self) {
        self.tracker.clear();
    }
}
