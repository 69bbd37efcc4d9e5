// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Line, Point};
use understory_raster::Quadtree;

/// Xorshift source of unit-interval coordinates, seeded per shape set.
struct Coords(u64);

impl Coords {
    fn next(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_circles(count: usize, max_r: f64) -> Vec<Circle> {
    let mut rng = Coords(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let c = Point::new(rng.next(), rng.next());
            Circle::new(c, rng.next() * max_r)
        })
        .collect()
}

fn gen_lines(count: usize) -> Vec<Line> {
    let mut rng = Coords(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            Line::new(
                Point::new(rng.next(), rng.next()),
                Point::new(rng.next(), rng.next()),
            )
        })
        .collect()
}

fn gen_triangles(count: usize) -> Vec<[Point; 3]> {
    let mut rng = Coords(0xC1A5_7E55_9999_ABCD);
    (0..count)
        .map(|_| {
            // Anchor one vertex on a cell corner so the fill has work to do.
            let a = Point::new(0.0, 0.0);
            let b = Point::new(rng.next() * 1.5, rng.next() * 0.5);
            let c = Point::new(rng.next() * 0.5, rng.next() * 1.5);
            [a, b, c]
        })
        .collect()
}

fn bench_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_circle");
    let circles = gen_circles(64, 0.5);
    for &depth in &[4u32, 6, 8] {
        group.throughput(Throughput::Elements(circles.len() as u64));
        group.bench_function(format!("depth{}", depth), |b| {
            b.iter_batched(
                || Quadtree::new(0u32),
                |mut qt| {
                    for (i, circle) in circles.iter().copied().enumerate() {
                        qt.fill_circle(circle, i as u32 % 4, depth);
                    }
                    black_box(qt.leaf_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let lines = gen_lines(32);
    for &depth in &[4u32, 6] {
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_function(format!("depth{}", depth), |b| {
            b.iter_batched(
                || Quadtree::new(0u32),
                |mut qt| {
                    for line in lines.iter().copied() {
                        qt.draw_line(line, 0.05, 1, depth);
                    }
                    black_box(qt.leaf_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_polygon");
    let triangles = gen_triangles(64);
    for &depth in &[4u32, 8] {
        group.throughput(Throughput::Elements(triangles.len() as u64));
        group.bench_function(format!("depth{}", depth), |b| {
            b.iter_batched(
                || Quadtree::new(0u32),
                |mut qt| {
                    for (i, tri) in triangles.iter().enumerate() {
                        qt.fill_polygon(tri, i as u32 % 3, depth);
                    }
                    black_box(qt.leaf_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn full_tree(depth: u32) -> Quadtree<u32> {
    if depth == 0 {
        return Quadtree::new(7);
    }
    Quadtree::from_children([0, 1, 2, 3].map(|_| full_tree(depth - 1)))
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &depth in &[4u32, 6] {
        group.throughput(Throughput::Elements(4u64.pow(depth)));
        group.bench_function(format!("uniform_depth{}", depth), |b| {
            b.iter_batched(
                || full_tree(depth),
                |mut qt| {
                    qt.merge_if_possible();
                    black_box(qt.is_leaf());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_circles,
    bench_lines,
    bench_polygons,
    bench_merge,
);
criterion_main!(benches);
