// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use broadphase_tree::Tree;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

fn gen_grid_rects(n: usize, cell: f64, scale: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, x0 + cell * scale, y0 + cell * scale));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");
    for &n in &[16_usize, 32, 64] {
        let rects = gen_grid_rects(n, 10.0, 0.8);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_grid/{}", n * n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let mut tree = Tree::new();
                    for r in rects {
                        let _ = tree.insert(r);
                    }
                    black_box(tree)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_query");
    for &n in &[32_usize, 64] {
        let rects = gen_grid_rects(n, 10.0, 0.8);
        let mut tree = Tree::new();
        for &r in &rects {
            let _ = tree.insert(r);
        }
        let world = n as f64 * 10.0;
        let probes = [
            Rect::new(0.0, 0.0, 25.0, 25.0),
            Rect::new(world * 0.5, world * 0.5, world * 0.5 + 25.0, world * 0.5 + 25.0),
            Rect::new(0.0, 0.0, world, world),
        ];
        group.bench_function(format!("probe_grid/{}", n * n), |b| {
            b.iter(|| {
                for &p in &probes {
                    black_box(tree.query(p));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
