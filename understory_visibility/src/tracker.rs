// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item threshold state machine plus the ordered set of visible items.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::axis::ScrollAxis;
use crate::change::{Transitions, VisibilityChange};
use crate::overlap::{is_roughly_visible, overlap_ratio};
use crate::threshold::Thresholds;

/// Bookkeeping for one visible item.
#[derive(Clone, Debug)]
struct Record {
    /// Offset from the container origin along the scroll axis.
    position: f64,
    /// Crossed thresholds, in activation order.
    active: SmallVec<[f64; 4]>,
}

/// Tracks which items overlap a container by at least each configured threshold.
///
/// The host reports the container rectangle once per layout pass with
/// [`report_container_bounds`](Self::report_container_bounds), then each
/// item's rectangle with [`report_item_bounds`](Self::report_item_bounds).
/// Every report returns the transitions it caused:
///
/// - While an item is [roughly visible](crate::is_roughly_visible), each
///   threshold `t` (in configured order) yields [`VisibilityChange::Shown`]
///   when the [overlap ratio](crate::overlap_ratio) first reaches `t`, and
///   [`VisibilityChange::Hidden`] when it falls back below `t`.
/// - When a visible item stops being roughly visible, its record is dropped
///   and a single [`VisibilityChange::EXIT`] is returned, however many
///   thresholds were active.
/// - Reports for items that were never visible and still are not visible
///   are no-ops.
///
/// Visible items are also kept sorted by their offset along the
/// [`ScrollAxis`], so the first and last visible items are O(1) queries.
/// Items with equal offsets keep a deterministic order: an item that is
/// inserted or moves is placed after the items it ties with.
///
/// Items are only re-evaluated when they are reported. Moving the container
/// does not re-evaluate existing records, and an item that stops being
/// reported keeps its record until it is reported off-screen or removed with
/// [`remove_item`](Self::remove_item) or [`retain_items`](Self::retain_items).
///
/// The tracker is a plain single-threaded value; it performs no locking.
///
/// ```
/// use kurbo::Rect;
/// use understory_visibility::{Thresholds, VisibilityChange, VisibilityTracker};
///
/// let mut tracker = VisibilityTracker::new(Thresholds::new([0.5]).unwrap());
/// tracker.report_container_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
///
/// let changes = tracker.report_item_bounds(&"a", Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(&changes[..], &[VisibilityChange::Shown(0.5)]);
/// assert_eq!(tracker.top_visible_item(), Some(&"a"));
///
/// let changes = tracker.report_item_bounds(&"a", Rect::new(200.0, 0.0, 300.0, 100.0));
/// assert_eq!(&changes[..], &[VisibilityChange::EXIT]);
/// assert_eq!(tracker.top_visible_item(), None);
/// ```
#[derive(Clone, Debug)]
pub struct VisibilityTracker<K>
where
    K: Clone + Eq + Hash + Debug,
{
    container: Rect,
    axis: ScrollAxis,
    thresholds: Thresholds,
    records: HashMap<K, Record>,
    /// Keys of `records`, ascending by position.
    sorted: Vec<K>,
    revision: u64,
}

impl<K> Default for VisibilityTracker<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl<K> VisibilityTracker<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates a tracker ordering items along [`ScrollAxis::Vertical`].
    ///
    /// The container starts as [`Rect::ZERO`], so nothing is visible until
    /// [`report_container_bounds`](Self::report_container_bounds) is called.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self::with_axis(thresholds, ScrollAxis::default())
    }

    /// Creates a tracker ordering items along `axis`.
    #[must_use]
    pub fn with_axis(thresholds: Thresholds, axis: ScrollAxis) -> Self {
        Self {
            container: Rect::ZERO,
            axis,
            thresholds,
            records: HashMap::new(),
            sorted: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the configured thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns the axis items are ordered along.
    #[must_use]
    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Returns the most recently reported container rectangle.
    #[must_use]
    pub fn container_bounds(&self) -> Rect {
        self.container
    }

    /// Replaces the container rectangle.
    ///
    /// No transitions are produced; existing records are re-evaluated only
    /// when their items are next reported.
    pub fn report_container_bounds(&mut self, bounds: Rect) {
        trace_event!(?bounds, "container bounds reported");
        self.container = bounds;
    }

    /// Reports the current rectangle of item `id` and returns the resulting transitions.
    ///
    /// `bounds` must be in the same coordinate space as the container.
    /// Transitions are returned in configured threshold order. Repeating a
    /// report with unchanged bounds returns no transitions.
    pub fn report_item_bounds(&mut self, id: &K, bounds: Rect) -> Transitions {
        if !is_roughly_visible(self.container, bounds) {
            return self.forget(id).into_iter().collect();
        }

        let ratio = overlap_ratio(self.container, bounds);
        let position = self.axis.offset(self.container, bounds);
        self.place(id, position);

        let mut changes = Transitions::new();
        let Some(record) = self.records.get_mut(id) else {
            return changes;
        };
        for threshold in self.thresholds.iter() {
            let active = record.active.contains(&threshold);
            if ratio >= threshold && !active {
                record.active.push(threshold);
                changes.push(VisibilityChange::Shown(threshold));
            } else if ratio < threshold && active {
                record.active.retain(|t| *t != threshold);
                changes.push(VisibilityChange::Hidden(threshold));
            }
        }

        if !changes.is_empty() {
            trace_event!(?id, ratio, ?changes, "visibility changed");
            self.bump_revision();
        }
        changes
    }

    /// Drops the record for `id`, if it is visible.
    ///
    /// Returns [`VisibilityChange::EXIT`] when a record was removed, matching
    /// what an off-screen report would have produced. Use this for items
    /// that are no longer materialized and so will not be reported again.
    pub fn remove_item(&mut self, id: &K) -> Option<VisibilityChange> {
        let change = self.forget(id);
        if change.is_some() {
            debug_event!(?id, "item removed");
        }
        change
    }

    /// Drops every visible item for which `keep` returns `false`.
    ///
    /// Returns the removed ids in their visible order. Each removal
    /// corresponds to a [`VisibilityChange::EXIT`]. A host that knows which
    /// ids it materialized in a pass can use this to discard stale records.
    pub fn retain_items<F>(&mut self, mut keep: F) -> Vec<K>
    where
        F: FnMut(&K) -> bool,
    {
        let mut removed = Vec::new();
        self.sorted.retain(|id| {
            if keep(id) {
                true
            } else {
                removed.push(id.clone());
                false
            }
        });
        for id in &removed {
            self.records.remove(id);
        }
        if !removed.is_empty() {
            debug_event!(count = removed.len(), "stale items removed");
            self.bump_revision();
        }
        removed
    }

    /// Forgets every record without producing transitions.
    ///
    /// The container bounds and configuration are kept.
    pub fn clear(&mut self) {
        if self.records.is_empty() {
            return;
        }
        debug_event!(count = self.records.len(), "visibility records cleared");
        self.records.clear();
        self.sorted.clear();
        self.bump_revision();
    }

    /// Returns the first visible item along the scroll axis.
    #[must_use]
    pub fn top_visible_item(&self) -> Option<&K> {
        self.sorted.first()
    }

    /// Returns the last visible item along the scroll axis.
    #[must_use]
    pub fn bottom_visible_item(&self) -> Option<&K> {
        self.sorted.last()
    }

    /// Returns all visible items, ascending by offset along the scroll axis.
    #[must_use]
    pub fn visible_items(&self) -> &[K] {
        &self.sorted
    }

    /// Returns `true` if `id` is currently visible.
    #[must_use]
    pub fn is_visible(&self, id: &K) -> bool {
        self.records.contains_key(id)
    }

    /// Returns the recorded offset of a visible item from the container origin.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<f64> {
        self.records.get(id).map(|record| record.position)
    }

    /// Returns the thresholds currently crossed by `id`, in activation order.
    ///
    /// Empty for items that are not visible.
    #[must_use]
    pub fn active_thresholds(&self, id: &K) -> &[f64] {
        self.records
            .get(id)
            .map(|record| record.active.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of visible items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns `true` if no items are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns a counter that is bumped whenever visible items, their order,
    /// or their active thresholds change.
    ///
    /// Reports that change nothing leave it untouched, so observers can use it
    /// as a cheap "anything new?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Upserts `id` at `position` and keeps `sorted` ordered.
    fn place(&mut self, id: &K, position: f64) {
        match self.records.get_mut(id) {
            Some(record) if record.position.total_cmp(&position).is_eq() => return,
            Some(record) => {
                let previous = record.position;
                record.position = position;
                self.unlink(id, previous);
            }
            None => {
                self.records.insert(
                    id.clone(),
                    Record {
                        position,
                        active: SmallVec::new(),
                    },
                );
            }
        }
        let records = &self.records;
        let index = self.sorted.partition_point(|other| {
            records
                .get(other)
                .is_some_and(|record| record.position.total_cmp(&position).is_le())
        });
        self.sorted.insert(index, id.clone());
        self.bump_revision();
    }

    /// Removes `id`'s record, returning the exit transition if it had one.
    fn forget(&mut self, id: &K) -> Option<VisibilityChange> {
        let record = self.records.remove(id)?;
        self.unlink(id, record.position);
        trace_event!(?id, "item left the container");
        self.bump_revision();
        Some(VisibilityChange::EXIT)
    }

    /// Removes `id` from `sorted`, where it was stored at `position`.
    fn unlink(&mut self, id: &K, position: f64) {
        let records = &self.records;
        // Only the run of entries tied with `position` can hold `id`.
        let start = self.sorted.partition_point(|other| {
            other != id
                && records
                    .get(other)
                    .is_some_and(|record| record.position.total_cmp(&position).is_lt())
        });
        if let Some(offset) = self.sorted[start..].iter().position(|other| other == id) {
            self.sorted.remove(start + offset);
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
