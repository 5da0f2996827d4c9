//! Greedy first-fit packing of child panes.

use slotgrid_core::{ClickEvent, ClickOutcome, GridSurface};

use crate::common::{Offset, Orientation, PaneCommon, PaneError};
use crate::Pane;

/// A pane that positions its children itself, packing each one into the
/// first free rectangular region in scan order.
///
/// Children are packed in insertion order with no backtracking: once a
/// child is anchored, later children work around it. A child whose
/// footprint fits nowhere is skipped for the pass; it is neither rendered
/// nor clickable until a later render finds room for it.
#[derive(Debug, Clone)]
pub struct MasonryPane<T> {
    common: PaneCommon,
    panes: Vec<Pane<T>>,
    orientation: Orientation,
    // Which children the most recent render managed to place.
    placed: Vec<bool>,
}

impl<T: Clone> MasonryPane<T> {
    /// Create an empty masonry pane.
    pub fn new(length: usize, height: usize) -> Result<Self, PaneError> {
        Ok(Self {
            common: PaneCommon::new(length, height)?,
            panes: Vec::new(),
            orientation: Orientation::Horizontal,
            placed: Vec::new(),
        })
    }

    /// Shared pane state.
    #[must_use]
    pub fn common(&self) -> &PaneCommon {
        &self.common
    }

    /// Shared pane state, mutable.
    pub fn common_mut(&mut self) -> &mut PaneCommon {
        &mut self.common
    }

    /// Resize the pane's columns.
    pub fn set_length(&mut self, length: usize) -> Result<(), PaneError> {
        self.common.set_length(length)
    }

    /// Resize the pane's rows.
    pub fn set_height(&mut self, height: usize) -> Result<(), PaneError> {
        self.common.set_height(height)
    }

    /// Append a child pane. Insertion order is packing priority.
    pub fn add_pane(&mut self, pane: Pane<T>) {
        self.panes.push(pane);
    }

    /// The children in insertion order.
    #[must_use]
    pub fn panes(&self) -> &[Pane<T>] {
        &self.panes
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.panes.clear();
        self.placed.clear();
    }

    /// Scan order for anchor candidates.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the anchor scan order.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Pack and render the children.
    pub fn display(
        &mut self,
        surface: &mut GridSurface<T>,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) {
        self.placed = vec![false; self.panes.len()];
        if !self.common.is_visible() {
            return;
        }
        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);

        // Occupancy over the clipped extents; cells record nothing beyond
        // taken/free, anchoring only needs emptiness.
        let mut occupied = vec![false; length * height];

        for (index, pane) in self.panes.iter_mut().enumerate() {
            let footprint_length = pane.common().length();
            let footprint_height = pane.common().height();

            let anchor = match self.orientation {
                Orientation::Horizontal => (0..height)
                    .flat_map(|y| (0..length).map(move |x| (x, y)))
                    .find(|&(x, y)| {
                        fits(&occupied, length, height, x, y, footprint_length, footprint_height)
                    }),
                Orientation::Vertical => (0..length)
                    .flat_map(|x| (0..height).map(move |y| (x, y)))
                    .find(|&(x, y)| {
                        fits(&occupied, length, height, x, y, footprint_length, footprint_height)
                    }),
            };

            // First fit or nothing: a child that fits nowhere is skipped
            // for this pass.
            let Some((anchor_x, anchor_y)) = anchor else {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    pane = pane.common().id().get(),
                    footprint_length,
                    footprint_height,
                    "masonry child does not fit"
                );
                continue;
            };

            for dy in 0..footprint_height {
                for dx in 0..footprint_length {
                    occupied[(anchor_y + dy) * length + (anchor_x + dx)] = true;
                }
            }

            pane.common_mut().set_position(anchor_x, anchor_y);
            self.placed[index] = true;
            pane.display(
                surface,
                offset.shifted(self.common.x(), self.common.y()),
                length,
                height,
            );
        }
    }

    /// Route a click to this pane and broadcast it to every child placed by
    /// the most recent render.
    pub fn click(
        &mut self,
        event: &ClickEvent,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) -> ClickOutcome {
        if !self.common.is_visible() {
            return ClickOutcome::MISS;
        }
        if self
            .common
            .local_coords(event.slot, event.row_width, offset, max_length, max_height)
            .is_none()
        {
            return ClickOutcome::MISS;
        }

        self.common.fire_click(event);

        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        let child_offset = offset.shifted(self.common.x(), self.common.y());

        let mut outcome = ClickOutcome::MISS;
        for (index, pane) in self.panes.iter_mut().enumerate() {
            if !self.placed.get(index).copied().unwrap_or(false) {
                continue;
            }
            // Broadcast: every placed child gets the event, regardless of
            // whether an earlier sibling already handled it.
            outcome |= pane.click(event, child_offset, length, height);
        }
        outcome
    }
}

fn fits(
    occupied: &[bool],
    length: usize,
    height: usize,
    x: usize,
    y: usize,
    footprint_length: usize,
    footprint_height: usize,
) -> bool {
    if x + footprint_length > length || y + footprint_height > height {
        return false;
    }
    (0..footprint_height)
        .all(|dy| (0..footprint_length).all(|dx| !occupied[(y + dy) * length + (x + dx)]))
}
