use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use slotgrid_panes::{GridSurface, MasonryPane, Offset, OutlinePane, Pane, VisualItem};

fn build_masonry(children: usize) -> MasonryPane<u32> {
    let mut masonry = MasonryPane::new(9, 6).unwrap();
    for index in 0..children {
        // Mixed footprints so the packer has to work around earlier panes.
        let (length, height) = match index % 3 {
            0 => (2, 2),
            1 => (3, 1),
            _ => (1, 1),
        };
        let mut child = OutlinePane::new(length, height).unwrap();
        child.set_repeat(true);
        child.add_item(VisualItem::new(index as u32));
        masonry.add_pane(Pane::Outline(child));
    }
    masonry
}

fn bench_masonry_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_pack");
    for children in [4usize, 16, 32] {
        group.bench_function(format!("children_{children}"), |b| {
            let mut masonry = build_masonry(children);
            let mut grid = GridSurface::new(9, 6);
            b.iter(|| {
                grid.clear();
                masonry.display(black_box(&mut grid), Offset::ZERO, 9, 6);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_masonry_pack);
criterion_main!(benches);
