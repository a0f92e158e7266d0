// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// A single visibility transition for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisibilityChange {
    /// The item's overlap ratio rose to or above this threshold.
    Shown(f64),
    /// The item's overlap ratio fell below this threshold.
    ///
    /// A threshold of `0.0` means the item left the container entirely; see
    /// [`VisibilityChange::is_exit`].
    Hidden(f64),
}

impl VisibilityChange {
    /// The transition emitted when a visible item stops being visible.
    pub const EXIT: Self = Self::Hidden(0.0);

    /// Returns the threshold this transition crossed.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Shown(t) | Self::Hidden(t) => t,
        }
    }

    /// Returns `true` for [`VisibilityChange::Shown`].
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown(_))
    }

    /// Returns `true` for [`VisibilityChange::Hidden`], including exits.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden(_))
    }

    /// Returns `true` if this is the "left the container" transition, `Hidden(0.0)`.
    #[must_use]
    pub fn is_exit(self) -> bool {
        matches!(self, Self::Hidden(t) if t == 0.0)
    }
}

/// Transitions produced by a single report, in delivery order.
pub type Transitions = SmallVec<[VisibilityChange; 2]>;
