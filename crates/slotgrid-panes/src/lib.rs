#![forbid(unsafe_code)]

//! Pane composition and click routing for the slotgrid layout engine.
//!
//! A pane owns a rectangular region of its parent's coordinate space and
//! either places items into it or positions further panes within it. Both
//! tree walks share one protocol: the render pass accumulates each pane's
//! offset while clipping to the parent's extents, and the click-routing
//! pass applies the identical accumulation to map an absolute slot index
//! back into pane-local coordinates. Routing is a broadcast: every
//! geometrically matching pane sees the event, and outcomes are OR-merged
//! without short-circuiting so overlapping siblings all respond.
//!
//! The variant set is closed: [`OutlinePane`] (sequential/masked
//! placement), [`MasonryPane`] (greedy first-fit packing),
//! [`PaginatedPane`] (keyed pages), and [`CycleButton`] (single active
//! alternative), unified by the [`Pane`] sum type. [`RootLayout`] drives a
//! whole tree against a [`GridSurface`].

pub mod common;
pub mod cycle;
pub mod masonry;
pub mod outline;
pub mod paginated;
pub mod root;

pub use common::{Flip, Offset, Orientation, PaneCommon, PaneError, Priority};
pub use cycle::CycleButton;
pub use masonry::MasonryPane;
pub use outline::OutlinePane;
pub use paginated::PaginatedPane;
pub use root::RootLayout;
// Re-exported so hosts depending on this crate alone can build trees.
pub use slotgrid_core::{
    ClickEvent, ClickHandler, ClickOutcome, GridSurface, ItemId, Mask, MaskError, PaneId,
    VisualItem,
};

/// A node in the layout tree: one of the four layout strategies.
///
/// Cloning a pane deep-copies its children, items, and configuration into
/// an independently mutable tree, while preserving every [`PaneId`] and
/// [`ItemId`] and sharing activation-handler handles. A clone is the same
/// logical pane to host-side change detection.
#[derive(Debug, Clone)]
pub enum Pane<T> {
    /// Sequential placement of items over masked cells.
    Outline(OutlinePane<T>),
    /// Greedy first-fit packing of child panes.
    Masonry(MasonryPane<T>),
    /// Keyed pages of child panes, one live at a time.
    Paginated(PaginatedPane<T>),
    /// Alternatives cycled by activation.
    Cycle(CycleButton<T>),
}

impl<T: Clone> Pane<T> {
    /// Shared pane state.
    #[must_use]
    pub fn common(&self) -> &PaneCommon {
        match self {
            Self::Outline(pane) => pane.common(),
            Self::Masonry(pane) => pane.common(),
            Self::Paginated(pane) => pane.common(),
            Self::Cycle(pane) => pane.common(),
        }
    }

    /// Shared pane state, mutable.
    ///
    /// Dimension changes are not exposed here; they go through the concrete
    /// variant so dimension-coupled state (an outline's mask) stays in
    /// step.
    pub fn common_mut(&mut self) -> &mut PaneCommon {
        match self {
            Self::Outline(pane) => pane.common_mut(),
            Self::Masonry(pane) => pane.common_mut(),
            Self::Paginated(pane) => pane.common_mut(),
            Self::Cycle(pane) => pane.common_mut(),
        }
    }

    /// Render this pane into the surface.
    ///
    /// `offset` is the accumulated origin of the parent chain;
    /// `max_length`/`max_height` clip the pane's effective extents.
    pub fn display(
        &mut self,
        surface: &mut GridSurface<T>,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) {
        match self {
            Self::Outline(pane) => pane.display(surface, offset, max_length, max_height),
            Self::Masonry(pane) => pane.display(surface, offset, max_length, max_height),
            Self::Paginated(pane) => pane.display(surface, offset, max_length, max_height),
            Self::Cycle(pane) => pane.display(surface, offset, max_length, max_height),
        }
    }

    /// Route a click through this pane, using the same offset-accumulation
    /// rule as [`display`](Self::display).
    pub fn click(
        &mut self,
        event: &ClickEvent,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) -> ClickOutcome {
        match self {
            Self::Outline(pane) => pane.click(event, offset, max_length, max_height),
            Self::Masonry(pane) => pane.click(event, offset, max_length, max_height),
            Self::Paginated(pane) => pane.click(event, offset, max_length, max_height),
            Self::Cycle(pane) => pane.click(event, offset, max_length, max_height),
        }
    }
}

impl<T> From<OutlinePane<T>> for Pane<T> {
    fn from(pane: OutlinePane<T>) -> Self {
        Self::Outline(pane)
    }
}

impl<T> From<MasonryPane<T>> for Pane<T> {
    fn from(pane: MasonryPane<T>) -> Self {
        Self::Masonry(pane)
    }
}

impl<T> From<PaginatedPane<T>> for Pane<T> {
    fn from(pane: PaginatedPane<T>) -> Self {
        Self::Paginated(pane)
    }
}

impl<T> From<CycleButton<T>> for Pane<T> {
    fn from(pane: CycleButton<T>) -> Self {
        Self::Cycle(pane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_dispatch_reaches_the_variant() {
        let mut outline = OutlinePane::new(2, 1).unwrap();
        let item = VisualItem::new("a");
        let id = item.id();
        outline.add_item(item);
        let mut pane = Pane::from(outline);

        let mut grid = GridSurface::new(2, 1);
        pane.display(&mut grid, Offset::ZERO, 2, 1);
        assert_eq!(grid.id_at_slot(0), Some(id));

        let outcome = pane.click(
            &ClickEvent::new(0, 2).with_item(id),
            Offset::ZERO,
            2,
            1,
        );
        assert!(outcome.handled);
    }

    #[test]
    fn clone_preserves_identity_across_every_variant() {
        let panes: Vec<Pane<()>> = vec![
            OutlinePane::new(1, 1).unwrap().into(),
            MasonryPane::new(1, 1).unwrap().into(),
            PaginatedPane::new(1, 1).unwrap().into(),
            CycleButton::new(1, 1).unwrap().into(),
        ];
        for pane in panes {
            let copy = pane.clone();
            assert_eq!(copy.common().id(), pane.common().id());
        }
    }
}
