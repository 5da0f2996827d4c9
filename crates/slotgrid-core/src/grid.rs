//! The addressable write target of the render pass.

use crate::identity::ItemId;
use crate::item::VisualItem;

/// A fixed-size slot grid the render pass assigns items into.
///
/// Coordinates are zero-based and row-major: cell `(x, y)` is slot
/// `y * length + x`. The surface owns no layout logic; panes write into it
/// and the host reads it back to drive its own presentation. Writes
/// outside the grid are silently discarded, so a pane clipped by the
/// surface edge is a best-effort miss rather than a fault.
#[derive(Debug, Clone)]
pub struct GridSurface<T> {
    length: usize,
    height: usize,
    cells: Vec<Option<VisualItem<T>>>,
}

impl<T: Clone> GridSurface<T> {
    /// Create an empty surface of `length` columns by `height` rows.
    #[must_use]
    pub fn new(length: usize, height: usize) -> Self {
        Self {
            length,
            height,
            cells: vec![None; length * height],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.length * self.height
    }

    /// Place a copy of `item` at `(x, y)`. Out-of-range writes are
    /// discarded.
    pub fn set_item(&mut self, item: &VisualItem<T>, x: usize, y: usize) {
        if x >= self.length || y >= self.height {
            return;
        }
        self.cells[y * self.length + x] = Some(item.clone());
    }

    /// The item displayed at `(x, y)`, if any.
    #[must_use]
    pub fn item_at(&self, x: usize, y: usize) -> Option<&VisualItem<T>> {
        if x >= self.length || y >= self.height {
            return None;
        }
        self.cells[y * self.length + x].as_ref()
    }

    /// The item displayed at an absolute slot index, if any.
    #[must_use]
    pub fn item_at_slot(&self, slot: usize) -> Option<&VisualItem<T>> {
        self.cells.get(slot)?.as_ref()
    }

    /// Identity of the item displayed at an absolute slot index.
    ///
    /// Convenience for hosts building a
    /// [`ClickEvent`](crate::event::ClickEvent) from a raw activation.
    #[must_use]
    pub fn id_at_slot(&self, slot: usize) -> Option<ItemId> {
        self.item_at_slot(slot).map(VisualItem::id)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
