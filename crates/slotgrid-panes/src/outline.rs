//! Sequential placement of a flat item collection into masked cells.

use slotgrid_core::{ClickEvent, ClickOutcome, GridSurface, Mask, VisualItem};

use crate::common::{Flip, Offset, Orientation, PaneCommon, PaneError, rotate_clockwise};

/// A pane laying its items out one after another over the enabled cells of
/// its mask, in scan order.
///
/// Placement supports a gap between consecutive items (counted in enabled
/// cells), cycling the item collection to fill the whole mask (`repeat`),
/// mirroring along either axis, and quarter-turn rotation on square panes.
/// The mask always has exactly the pane's dimensions; resizing the pane
/// resizes the mask, with newly exposed cells enabled.
#[derive(Debug, Clone)]
pub struct OutlinePane<T> {
    common: PaneCommon,
    items: Vec<VisualItem<T>>,
    orientation: Orientation,
    rotation: u16,
    gap: usize,
    repeat: bool,
    flip: Flip,
    mask: Mask,
}

impl<T: Clone> OutlinePane<T> {
    /// Create an empty outline pane with a fully enabled mask.
    pub fn new(length: usize, height: usize) -> Result<Self, PaneError> {
        let common = PaneCommon::new(length, height)?;
        // Positive dimensions were just validated.
        let mask = Mask::filled(length, height).map_err(|_| PaneError::ZeroDimension {
            length,
            height,
        })?;
        Ok(Self {
            common,
            items: Vec::new(),
            orientation: Orientation::Horizontal,
            rotation: 0,
            gap: 0,
            repeat: false,
            flip: Flip::empty(),
            mask,
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

    /// Append an item to the placement order.
    pub fn add_item(&mut self, item: VisualItem<T>) {
        self.items.push(item);
    }

    /// Insert an item at a specific position in the placement order.
    ///
    /// # Panics
    ///
    /// Panics if `index > items.len()`, like [`Vec::insert`].
    pub fn insert_item(&mut self, item: VisualItem<T>, index: usize) {
        self.items.insert(index, item);
    }

    /// Remove the first item with the given identity, returning it.
    pub fn remove_item(&mut self, id: slotgrid_core::ItemId) -> Option<VisualItem<T>> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The items in placement order.
    #[must_use]
    pub fn items(&self) -> &[VisualItem<T>] {
        &self.items
    }

    /// Scan order for placement.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the scan order.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Clockwise rotation in degrees.
    #[must_use]
    pub const fn rotation(&self) -> u16 {
        self.rotation
    }

    /// Set the clockwise rotation.
    ///
    /// Only multiples of 90 degrees are accepted, and only on square panes;
    /// anything else is a configuration error and leaves the pane
    /// unchanged.
    pub fn set_rotation(&mut self, degrees: u16) -> Result<(), PaneError> {
        if self.common.length() != self.common.height() {
            return Err(PaneError::RotationOnNonSquare {
                length: self.common.length(),
                height: self.common.height(),
            });
        }
        if degrees % 90 != 0 {
            return Err(PaneError::RotationNotMultipleOf90 { degrees });
        }
        self.rotation = degrees % 360;
        Ok(())
    }

    /// Number of enabled cells skipped between consecutive placements.
    #[must_use]
    pub const fn gap(&self) -> usize {
        self.gap
    }

    /// Set the placement gap.
    pub fn set_gap(&mut self, gap: usize) {
        self.gap = gap;
    }

    /// Whether the item collection cycles to fill every enabled cell.
    #[must_use]
    pub const fn repeats(&self) -> bool {
        self.repeat
    }

    /// Set whether the item collection repeats.
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Active mirroring flags.
    #[must_use]
    pub const fn flip(&self) -> Flip {
        self.flip
    }

    /// Set the mirroring flags.
    pub fn set_flip(&mut self, flip: Flip) {
        self.flip = flip;
    }

    /// The placement mask.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Replace the placement mask. The mask's dimensions must equal the
    /// pane's.
    pub fn apply_mask(&mut self, mask: Mask) -> Result<(), PaneError> {
        if mask.length() != self.common.length() || mask.height() != self.common.height() {
            return Err(PaneError::MaskDimensionMismatch {
                mask_length: mask.length(),
                mask_height: mask.height(),
                pane_length: self.common.length(),
                pane_height: self.common.height(),
            });
        }
        self.mask = mask;
        Ok(())
    }

    /// Resize the pane's columns, resizing the mask with it.
    pub fn set_length(&mut self, length: usize) -> Result<(), PaneError> {
        let mask = self.mask.with_length(length).map_err(|_| PaneError::ZeroDimension {
            length,
            height: self.common.height(),
        })?;
        self.common.set_length(length)?;
        self.mask = mask;
        Ok(())
    }

    /// Resize the pane's rows, resizing the mask with it.
    pub fn set_height(&mut self, height: usize) -> Result<(), PaneError> {
        let mask = self.mask.with_height(height).map_err(|_| PaneError::ZeroDimension {
            length: self.common.length(),
            height,
        })?;
        self.common.set_height(height)?;
        self.mask = mask;
        Ok(())
    }

    /// First enabled mask cell in scan order, the placement cursor's start.
    fn first_enabled_cell(&self) -> Option<(usize, usize)> {
        match self.orientation {
            Orientation::Horizontal => (0..self.mask.height())
                .flat_map(|y| (0..self.mask.length()).map(move |x| (x, y)))
                .find(|&(x, y)| self.mask.is_enabled(x, y)),
            Orientation::Vertical => (0..self.mask.length())
                .flat_map(|x| (0..self.mask.height()).map(move |y| (x, y)))
                .find(|&(x, y)| self.mask.is_enabled(x, y)),
        }
    }

    /// Render the items into the surface.
    pub fn display(
        &mut self,
        surface: &mut GridSurface<T>,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) {
        if !self.common.is_visible() || self.items.is_empty() {
            return;
        }
        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        let Some((mut x, mut y)) = self.first_enabled_cell() else {
            return;
        };

        let item_count = self.items.len();
        let placements = if self.repeat {
            self.mask.enabled_count().max(surface.cell_count())
        } else {
            item_count
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            pane = self.common.id().get(),
            placements,
            ?offset,
            "outline display"
        );

        'place: for i in 0..placements {
            let item = &self.items[i % item_count];

            // Mirror, then rotate. Either can push a coordinate out of the
            // clipped extents; such placements are skipped, not errors.
            let mut new_x = x as isize;
            let mut new_y = y as isize;
            if self.flip.contains(Flip::HORIZONTAL) {
                new_x = length as isize - x as isize - 1;
            }
            if self.flip.contains(Flip::VERTICAL) {
                new_y = height as isize - y as isize - 1;
            }
            let (new_x, new_y) =
                rotate_clockwise(new_x, new_y, length as isize, height as isize, self.rotation);

            let in_bounds = new_x >= 0
                && new_x < length as isize
                && new_y >= 0
                && new_y < height as isize;
            // An invisible item consumes its placement slot but is never
            // written.
            if in_bounds && item.is_visible() {
                let column = self.common.x() + offset.x + new_x as usize;
                let row = self.common.y() + offset.y + new_y as usize;
                surface.set_item(item, column, row);
            }

            // Advance to the next enabled cell, skipping `gap` enabled
            // cells on the way. Disabled cells don't consume gap budget.
            let mut gap_budget = self.gap as isize;
            loop {
                match self.orientation {
                    Orientation::Horizontal => {
                        x += 1;
                        if x >= length {
                            x = 0;
                            y += 1;
                        }
                    }
                    Orientation::Vertical => {
                        y += 1;
                        if y >= height {
                            y = 0;
                            x += 1;
                        }
                    }
                }
                if x >= length || y >= height {
                    break 'place;
                }
                if self.mask.is_enabled(x, y) {
                    gap_budget -= 1;
                }
                if gap_budget < 0 {
                    break;
                }
            }
        }
    }

    /// Route a click. The target item is resolved by matching the event's
    /// displayed item identity against the collection, not by recomputing
    /// placement geometry.
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

        let Some(current) = event.current_item else {
            return ClickOutcome::MISS;
        };
        let Some(item) = self.items.iter().find(|item| item.id() == current) else {
            return ClickOutcome::MISS;
        };
        item.fire_click(event);
        ClickOutcome::HANDLED
    }
}
