//! End-to-end routing through nested trees: the render pass and the click
//! pass must agree on offset accumulation, and routing must broadcast.

use std::cell::Cell;
use std::rc::Rc;

use slotgrid_panes::{
    ClickEvent, CycleButton, GridSurface, MasonryPane, Offset, OutlinePane, PaginatedPane, Pane,
    RootLayout, VisualItem,
};

fn counter_item<T: Clone>(content: T) -> (VisualItem<T>, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    let item = VisualItem::new(content).on_click(Rc::new(move |_| counter.set(counter.get() + 1)));
    (item, hits)
}

#[test]
fn overlapping_siblings_both_receive_one_click() {
    let (item, item_hits) = counter_item("shared");
    let item_id = item.id();

    // The same logical item sits in two overlapping panes; a clone shares
    // the identity and the handler.
    let mut first = OutlinePane::new(1, 1).unwrap();
    first.add_item(item.clone());
    let mut second = OutlinePane::new(1, 1).unwrap();
    second.add_item(item);

    let first_pane_hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&first_pane_hits);
    first
        .common_mut()
        .set_click_handler(Some(Rc::new(move |_| counter.set(counter.get() + 1))));
    let second_pane_hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&second_pane_hits);
    second
        .common_mut()
        .set_click_handler(Some(Rc::new(move |_| counter.set(counter.get() + 1))));

    let mut root = RootLayout::new();
    root.add_pane(Pane::Outline(first));
    root.add_pane(Pane::Outline(second));

    let outcome = root.click(&ClickEvent::new(0, 1).with_item(item_id), 1, 1);

    assert!(outcome.handled);
    assert_eq!(first_pane_hits.get(), 1);
    assert_eq!(second_pane_hits.get(), 1);
    // Both panes resolved the item and fired the shared handler.
    assert_eq!(item_hits.get(), 2);
}

#[test]
fn broadcast_does_not_stop_at_the_first_handler() {
    // The earlier sibling handles the click; the later one must still see
    // it.
    let (first_item, first_hits) = counter_item(0u8);
    let first_id = first_item.id();
    let mut first = OutlinePane::new(1, 1).unwrap();
    first.add_item(first_item);

    let later_pane_hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&later_pane_hits);
    let mut second: OutlinePane<u8> = OutlinePane::new(1, 1).unwrap();
    second
        .common_mut()
        .set_click_handler(Some(Rc::new(move |_| counter.set(counter.get() + 1))));

    let mut root = RootLayout::new();
    root.add_pane(Pane::Outline(first));
    root.add_pane(Pane::Outline(second));

    let outcome = root.click(&ClickEvent::new(0, 1).with_item(first_id), 1, 1);

    assert!(outcome.handled);
    assert_eq!(first_hits.get(), 1);
    assert_eq!(later_pane_hits.get(), 1);
}

#[test]
fn click_routes_through_a_positioned_paginated_pane() {
    let mut paginated = PaginatedPane::new(3, 2).unwrap();
    paginated.common_mut().set_position(2, 1);

    let (item, hits) = counter_item("target");
    paginated.populate_with_items(vec![item]);

    let mut root = RootLayout::new();
    root.add_pane(Pane::Paginated(paginated));

    let mut grid = GridSurface::new(9, 6);
    root.display(&mut grid);

    // The single item lands at the pane's origin, absolute cell (2, 1).
    let slot = 9 + 2;
    let displayed = grid.id_at_slot(slot).expect("item must be rendered");

    let outcome = root.click(&ClickEvent::new(slot, 9).with_item(displayed), 9, 6);
    assert!(outcome.handled);
    assert_eq!(hits.get(), 1);

    // One cell to the left belongs to no pane.
    let outcome = root.click(&ClickEvent::new(9 + 1, 9), 9, 6);
    assert!(!outcome.handled);
}

#[test]
fn click_routes_through_masonry_into_a_packed_child() {
    let (item, hits) = counter_item("packed");
    let mut child = OutlinePane::new(2, 1).unwrap();
    child.add_item(item);

    let mut masonry = MasonryPane::new(3, 3).unwrap();
    masonry.common_mut().set_position(1, 1);
    masonry.add_pane(Pane::Outline(child));

    let mut root = RootLayout::new();
    root.add_pane(Pane::Masonry(masonry));

    let mut grid = GridSurface::new(9, 6);
    root.display(&mut grid);

    // Child anchored at masonry-local (0, 0), absolute (1, 1) = slot 10.
    let displayed = grid.id_at_slot(10).expect("child item must be rendered");
    let outcome = root.click(&ClickEvent::new(10, 9).with_item(displayed), 9, 6);
    assert!(outcome.handled);
    assert_eq!(hits.get(), 1);
}

#[test]
fn cycle_redraw_request_survives_the_merge() {
    let mut on = OutlinePane::new(1, 1).unwrap();
    let on_item = VisualItem::new("on");
    let on_id = on_item.id();
    on.add_item(on_item);
    let mut off = OutlinePane::new(1, 1).unwrap();
    let off_item = VisualItem::new("off");
    let off_id = off_item.id();
    off.add_item(off_item);

    let mut button = CycleButton::new(1, 1).unwrap();
    button.add_pane(Pane::Outline(off));
    button.add_pane(Pane::Outline(on));

    let mut root = RootLayout::new();
    root.add_pane(Pane::Cycle(button));

    let mut grid = GridSurface::new(1, 1);
    root.display(&mut grid);
    assert_eq!(grid.id_at_slot(0), Some(off_id));

    let outcome = root.click(&ClickEvent::new(0, 1).with_item(off_id), 1, 1);
    assert!(outcome.handled);
    assert!(outcome.redraw, "a cycle advance must request a redraw");

    // The host reacts to the redraw request; the new alternative shows.
    root.display(&mut grid);
    assert_eq!(grid.id_at_slot(0), Some(on_id));
}

#[test]
fn render_and_routing_agree_under_deep_nesting() {
    // outline inside masonry inside a positioned paginated pane: the click
    // pass must accumulate the same offsets the render pass did.
    let (item, hits) = counter_item(7u8);
    let mut leaf = OutlinePane::new(1, 1).unwrap();
    leaf.add_item(item);

    let mut masonry = MasonryPane::new(2, 2).unwrap();
    masonry.add_pane(Pane::Outline(leaf));

    let mut paginated = PaginatedPane::new(2, 2).unwrap();
    paginated.common_mut().set_position(3, 2);
    paginated.add_pane(0, Pane::Masonry(masonry));
    paginated.set_page(0).unwrap();

    let mut root = RootLayout::new();
    root.add_pane(Pane::Paginated(paginated));

    let mut grid = GridSurface::new(9, 6);
    root.display(&mut grid);

    let slot = 2 * 9 + 3;
    let displayed = grid.id_at_slot(slot).expect("leaf item must be rendered");
    let outcome = root.click(&ClickEvent::new(slot, 9).with_item(displayed), 9, 6);
    assert!(outcome.handled);
    assert_eq!(hits.get(), 1);
}

#[test]
fn direct_pane_use_matches_root_driven_use() {
    // Panes are usable without the root container; the explicit offset and
    // clip arguments behave identically.
    let (item, hits) = counter_item(1u8);
    let mut outline = OutlinePane::new(2, 1).unwrap();
    outline.common_mut().set_position(1, 0);
    let id = item.id();
    outline.add_item(item);
    let mut pane = Pane::Outline(outline);

    let mut grid = GridSurface::new(4, 1);
    pane.display(&mut grid, Offset::ZERO, 4, 1);
    assert_eq!(grid.id_at_slot(1), Some(id));

    let outcome = pane.click(&ClickEvent::new(1, 4).with_item(id), Offset::ZERO, 4, 1);
    assert!(outcome.handled);
    assert_eq!(hits.get(), 1);
}
