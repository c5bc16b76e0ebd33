// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use circlet_grid::{
    Border, BorderWidth, Constraint, DisplayList, GridLayout, GridShape, GridStyle, Rgba,
    StaticGrid, paint_cells,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, width: f64, height: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * width, rng.next_f64() * height))
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let style = GridStyle::default();
    let mut group = c.benchmark_group("measure");
    for n in [42_usize, 490, 4900] {
        let shape = GridShape::new(n, 7, true);
        group.bench_function(format!("exact_n{}", n), |b| {
            b.iter(|| {
                GridLayout::measure(
                    black_box(&style),
                    black_box(shape),
                    Constraint::Exact(640.0),
                    Constraint::AtMost(2000.0),
                )
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let style = GridStyle::default();
    let mut group = c.benchmark_group("hit_test");
    for (n, columns) in [(42_usize, 7_usize), (10_000, 100)] {
        let layout = GridLayout::measure(
            &style,
            GridShape::new(n, columns, true),
            Constraint::Exact(800.0),
            Constraint::Unspecified,
        );
        let points = gen_points(1024, layout.size.width, layout.size.height, 0x5eed + n as u64);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("random_points_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for p in &points {
                    if layout.hit_test(black_box(*p)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
        group.bench_function(format!("bounds_round_trip_n{}", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    let center = layout.cell_bounds(i).map(|r| r.center());
                    black_box(center.and_then(|p| layout.hit_test(p)));
                }
            });
        });
    }
    group.finish();
}

fn bench_paint(c: &mut Criterion) {
    let style = GridStyle::default();
    let mut group = c.benchmark_group("paint");
    let n = 42;
    let texts = (0..n).map(|i| i.to_string()).collect();
    let rings = vec![
        Border::stroke(BorderWidth::Scaled(1.0), Rgba::BLACK),
        Border::stroke(BorderWidth::Scaled(3.0), Rgba::BLACK.with_alpha(128)),
    ];
    let grid = StaticGrid::new(7, texts, vec![rings; n]).with_header(true);
    let layout = GridLayout::natural(&style, GridShape::new(n, 7, true));
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("display_list_two_rings", |b| {
        b.iter_batched(
            DisplayList::new,
            |mut list| {
                paint_cells(&layout, &grid, Rgba::WHITE, &mut list);
                list
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_measure, bench_hit_test, bench_paint);
criterion_main!(benches);
