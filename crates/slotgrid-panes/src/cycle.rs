//! A single-child selector that advances on every activation.

use slotgrid_core::{ClickEvent, ClickOutcome, GridSurface};

use crate::common::{Offset, PaneCommon, PaneError};
use crate::Pane;

/// A pane holding alternative children, exactly one of which is active.
///
/// Rendering shows only the current alternative. A routed click advances
/// the position (wrapping past the end) *before* delegating to the newly
/// current child, and requests a redraw because the correct rendering has
/// changed. Adding an alternative never moves the position.
#[derive(Debug, Clone)]
pub struct CycleButton<T> {
    common: PaneCommon,
    panes: Vec<Pane<T>>,
    position: usize,
}

impl<T: Clone> CycleButton<T> {
    /// Create a cycle button with no alternatives.
    pub fn new(length: usize, height: usize) -> Result<Self, PaneError> {
        Ok(Self {
            common: PaneCommon::new(length, height)?,
            panes: Vec::new(),
            position: 0,
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

    /// Append an alternative.
    pub fn add_pane(&mut self, pane: Pane<T>) {
        self.panes.push(pane);
    }

    /// Insert an alternative at a specific index.
    ///
    /// # Panics
    ///
    /// Panics if `index > panes.len()`, like [`Vec::insert`].
    pub fn insert_pane(&mut self, pane: Pane<T>, index: usize) {
        self.panes.insert(index, pane);
    }

    /// The alternatives in order.
    #[must_use]
    pub fn panes(&self) -> &[Pane<T>] {
        &self.panes
    }

    /// Index of the active alternative.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Remove every alternative and reset the position.
    pub fn clear(&mut self) {
        self.panes.clear();
        self.position = 0;
    }

    /// Advance to the next alternative, wrapping past the end. A no-op
    /// with no alternatives.
    pub fn cycle(&mut self) {
        if self.panes.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.panes.len();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            pane = self.common.id().get(),
            position = self.position,
            "cycle advanced"
        );
    }

    /// Render the active alternative.
    pub fn display(
        &mut self,
        surface: &mut GridSurface<T>,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) {
        if !self.common.is_visible() {
            return;
        }
        let child_offset = offset.shifted(self.common.x(), self.common.y());
        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        let position = self.position;
        let Some(pane) = self.panes.get_mut(position) else {
            return;
        };
        pane.display(surface, child_offset, length, height);
    }

    /// Route a click: advance, delegate to the now-current child, request a
    /// redraw.
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
        // Without alternatives there is no state to advance and no child to
        // delegate to.
        if self.panes.is_empty() {
            return ClickOutcome::MISS;
        }

        self.position = (self.position + 1) % self.panes.len();
        self.common.fire_click(event);

        let child_offset = offset.shifted(self.common.x(), self.common.y());
        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        let position = self.position;
        self.panes[position].click(event, child_offset, length, height);

        ClickOutcome {
            handled: true,
            redraw: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutlinePane;
    use slotgrid_core::VisualItem;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracked_outline(
        content: &'static str,
    ) -> (Pane<&'static str>, slotgrid_core::ItemId, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        let mut outline = OutlinePane::new(1, 1).unwrap();
        outline.add_item(
            VisualItem::new(content).on_click(Rc::new(move |_| counter.set(counter.get() + 1))),
        );
        let id = outline.items()[0].id();
        (Pane::Outline(outline), id, hits)
    }

    #[test]
    fn three_activations_wrap_back_to_the_start() {
        let mut button = CycleButton::new(1, 1).unwrap();
        for content in ["a", "b", "c"] {
            let (pane, _, _) = tracked_outline(content);
            button.add_pane(pane);
        }
        assert_eq!(button.position(), 0);

        for expected in [1, 2, 0] {
            let outcome = button.click(&ClickEvent::new(0, 1), Offset::ZERO, 1, 1);
            assert!(outcome.handled);
            assert!(outcome.redraw);
            assert_eq!(button.position(), expected);
        }
    }

    #[test]
    fn click_delegates_to_the_post_advance_child() {
        let mut button = CycleButton::new(1, 1).unwrap();
        let (first, _, first_hits) = tracked_outline("a");
        let (second, second_id, second_hits) = tracked_outline("b");
        button.add_pane(first);
        button.add_pane(second);

        // The click carries the item of the child that becomes current
        // after advancing; that child's item handler must fire.
        let outcome = button.click(
            &ClickEvent::new(0, 1).with_item(second_id),
            Offset::ZERO,
            1,
            1,
        );
        assert!(outcome.handled);
        assert_eq!(second_hits.get(), 1);
        assert_eq!(first_hits.get(), 0);
    }

    #[test]
    fn display_shows_only_the_current_alternative() {
        let mut button = CycleButton::new(1, 1).unwrap();
        let (first, first_id, _) = tracked_outline("a");
        let (second, second_id, _) = tracked_outline("b");
        button.add_pane(first);
        button.add_pane(second);

        let mut grid = GridSurface::new(1, 1);
        button.display(&mut grid, Offset::ZERO, 1, 1);
        assert_eq!(grid.id_at_slot(0), Some(first_id));

        button.cycle();
        grid.clear();
        button.display(&mut grid, Offset::ZERO, 1, 1);
        assert_eq!(grid.id_at_slot(0), Some(second_id));
    }

    #[test]
    fn cycle_wraps() {
        let mut button: CycleButton<&str> = CycleButton::new(1, 1).unwrap();
        let (first, _, _) = tracked_outline("a");
        let (second, _, _) = tracked_outline("b");
        button.add_pane(first);
        button.add_pane(second);

        button.cycle();
        assert_eq!(button.position(), 1);
        button.cycle();
        assert_eq!(button.position(), 0);
    }

    #[test]
    fn empty_button_is_a_guarded_no_op() {
        let mut button: CycleButton<()> = CycleButton::new(1, 1).unwrap();
        let outcome = button.click(&ClickEvent::new(0, 1), Offset::ZERO, 1, 1);
        assert_eq!(outcome, ClickOutcome::MISS);
        button.cycle();
        assert_eq!(button.position(), 0);

        let mut grid = GridSurface::new(1, 1);
        button.display(&mut grid, Offset::ZERO, 1, 1);
        assert!(grid.id_at_slot(0).is_none());
    }

    #[test]
    fn adding_an_alternative_keeps_the_position() {
        let mut button = CycleButton::new(1, 1).unwrap();
        let (first, _, _) = tracked_outline("a");
        let (second, _, _) = tracked_outline("b");
        button.add_pane(first);
        button.cycle();
        assert_eq!(button.position(), 0);
        button.add_pane(second);
        button.cycle();
        assert_eq!(button.position(), 1);
        let (third, _, _) = tracked_outline("c");
        button.insert_pane(third, 0);
        assert_eq!(button.position(), 1);
    }

    #[test]
    fn clone_preserves_identity_and_position() {
        let mut button = CycleButton::new(1, 1).unwrap();
        let (first, _, _) = tracked_outline("a");
        let (second, _, _) = tracked_outline("b");
        button.add_pane(first);
        button.add_pane(second);
        button.cycle();

        let copy = button.clone();
        assert_eq!(copy.common().id(), button.common().id());
        assert_eq!(copy.position(), 1);
        assert_eq!(copy.panes().len(), 2);
    }
}
