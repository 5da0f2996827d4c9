//! The top of a pane tree: priority-ordered siblings over one surface.

use slotgrid_core::{ClickEvent, ClickOutcome, GridSurface};

use crate::common::Offset;
use crate::Pane;

/// Owns the top-level panes of a surface and drives both passes.
///
/// Siblings are kept sorted ascending by priority, so higher-priority
/// panes render later (on top of lower ones) and see clicks last. A render
/// clears the surface first: the tree is the single source of truth for
/// what is displayed, and stale cells from a previous pass (a page switch,
/// a cycle advance) must not survive.
#[derive(Debug, Clone, Default)]
pub struct RootLayout<T> {
    panes: Vec<Pane<T>>,
}

impl<T: Clone> RootLayout<T> {
    /// Create an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self { panes: Vec::new() }
    }

    /// Add a top-level pane, keeping the priority order. Insertion order
    /// breaks ties.
    pub fn add_pane(&mut self, pane: Pane<T>) {
        self.panes.push(pane);
        self.panes.sort_by_key(|pane| pane.common().priority());
    }

    /// The top-level panes in render order.
    #[must_use]
    pub fn panes(&self) -> &[Pane<T>] {
        &self.panes
    }

    /// The top-level panes, mutable.
    pub fn panes_mut(&mut self) -> &mut [Pane<T>] {
        &mut self.panes
    }

    /// Remove every pane.
    pub fn clear(&mut self) {
        self.panes.clear();
    }

    /// Render the whole tree into the surface.
    pub fn display(&mut self, surface: &mut GridSurface<T>) {
        surface.clear();
        let length = surface.length();
        let height = surface.height();
        for pane in &mut self.panes {
            pane.display(surface, Offset::ZERO, length, height);
        }
    }

    /// Broadcast a click over the whole tree.
    ///
    /// `max_length`/`max_height` are the extents of the grid the event
    /// occurred in. Every pane is attempted; a `handled` result from an
    /// early sibling never suppresses later ones.
    pub fn click(
        &mut self,
        event: &ClickEvent,
        max_length: usize,
        max_height: usize,
    ) -> ClickOutcome {
        let mut outcome = ClickOutcome::MISS;
        for pane in &mut self.panes {
            outcome |= pane.click(event, Offset::ZERO, max_length, max_height);
        }
        outcome
    }
}
