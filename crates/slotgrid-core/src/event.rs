//! Click event and outcome values shared by the routing protocol.

use std::ops::{BitOr, BitOrAssign};

use crate::identity::ItemId;

/// A single activation delivered by the host event source.
///
/// The routing protocol only needs the absolute cell index and the row
/// width of the grid it occurred in. `current_item` carries the identity of
/// the item displayed at that cell, if any; the host reads it back from its
/// own [`GridSurface`](crate::GridSurface) before routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Absolute cell index, row-major over the grid surface.
    pub slot: usize,
    /// Number of cells per row in the grid the click occurred in.
    pub row_width: usize,
    /// Identity of the item currently displayed at `slot`, if any.
    pub current_item: Option<ItemId>,
}

impl ClickEvent {
    /// Create an event for a bare cell with no displayed item.
    #[must_use]
    pub const fn new(slot: usize, row_width: usize) -> Self {
        Self {
            slot,
            row_width,
            current_item: None,
        }
    }

    /// Attach the identity of the displayed item.
    #[must_use]
    pub const fn with_item(mut self, item: ItemId) -> Self {
        self.current_item = Some(item);
        self
    }
}

/// Result of routing a click through a pane tree.
///
/// Outcomes from sibling panes are merged with `|`, which ORs both fields.
/// Routing is a broadcast: every geometrically matching pane is attempted
/// and the merge must never short-circuit past later siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Whether some pane or item consumed the click.
    pub handled: bool,
    /// Whether the owning surface must re-render (the displayed tree
    /// changed as part of handling, e.g. a cycle button advanced).
    pub redraw: bool,
}

impl ClickOutcome {
    /// An outcome that neither handled the click nor requests a redraw.
    pub const MISS: Self = Self {
        handled: false,
        redraw: false,
    };

    /// An outcome that handled the click without requesting a redraw.
    pub const HANDLED: Self = Self {
        handled: true,
        redraw: false,
    };
}

impl BitOr for ClickOutcome {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            handled: self.handled || rhs.handled,
            redraw: self.redraw || rhs.redraw,
        }
    }
}

impl BitOrAssign for ClickOutcome {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
