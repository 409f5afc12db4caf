use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use room_tiles::{Axis, Layout, Size, TileId};

const COLUMNS: usize = 8;
const ROWS: usize = 6;

/// Dashboard of `COLUMNS` joined columns, each split into `ROWS` joined rows.
fn build_dashboard() -> (Layout, TileId, Vec<TileId>) {
    let mut layout = Layout::new();
    let screen = layout.new_root();
    layout.set_size(screen, 240, 80);

    let header = layout.new_named_subtile(screen, "header");
    layout.set_size(header, 0, 2);
    let body = layout.new_named_subtile(screen, "body");
    let footer = layout.new_named_subtile(screen, "footer");
    layout.set_size(footer, 0, 1);
    layout.join_vertical(&[header, body, footer]);

    let columns: Vec<_> = (0..COLUMNS).map(|_| layout.new_subtile(body)).collect();
    layout.join_horizontal(&columns);

    let mut cells = Vec::with_capacity(COLUMNS * ROWS);
    for &column in &columns {
        let rows: Vec<_> = (0..ROWS).map(|_| layout.new_subtile(column)).collect();
        layout.join_vertical(&rows);
        cells.extend(rows);
    }

    (layout, screen, cells)
}

fn resolve_cold(c: &mut Criterion) {
    c.bench_function("resolve_cold_dashboard", |b| {
        b.iter_batched(
            build_dashboard,
            |(mut layout, _, cells)| {
                for cell in cells {
                    black_box(layout.size(cell));
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn resize_cycle(c: &mut Criterion) {
    let (mut layout, screen, cells) = build_dashboard();
    let sizes = [Size::new(240, 80), Size::new(120, 40), Size::new(200, 60)];
    let mut step = 0usize;

    c.bench_function("resize_recalculate_resolve", |b| {
        b.iter(|| {
            let size = sizes[step % sizes.len()];
            step += 1;
            layout.set_size(screen, size.width, size.height);
            layout.recalculate(screen);
            for &cell in &cells {
                black_box(layout.size(cell));
            }
        });
    });
}

fn walk_long_chain(c: &mut Criterion) {
    let mut layout = Layout::new();
    let tiles: Vec<_> = (0..256).map(|_| layout.new_root()).collect();
    layout.join_horizontal(&tiles);
    let middle = tiles[128];

    c.bench_function("chain_walk_256", |b| {
        b.iter(|| black_box(layout.chain(black_box(middle), Axis::Horizontal).count()));
    });
}

criterion_group!(benches, resolve_cold, resize_cycle, walk_long_chain);
criterion_main!(benches);
