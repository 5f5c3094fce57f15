// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use broadphase_index::{Index, Pair};
use broadphase_tree::overlaps;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

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

fn gen_random_boxes(count: usize, world: f64, size: f64) -> Vec<(f64, f64, f64, f64)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * (world - size);
        let y = rng.next_f64() * (world - size);
        out.push((x, y, size, size));
    }
    out
}

fn gen_clustered_boxes(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64, f64, f64)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.next_f64() * 5000.0;
        let cy = rng.next_f64() * 5000.0;
        for _ in 0..per_cluster {
            let x = cx + (rng.next_f64() - 0.5) * spread;
            let y = cy + (rng.next_f64() - 0.5) * spread;
            out.push((x, y, 4.0, 4.0));
        }
    }
    out
}

fn build_index(boxes: &[(f64, f64, f64, f64)]) -> Index {
    let mut idx = Index::new();
    for &(x, y, l, h) in boxes {
        idx.make_box(x, y, l, h).expect("bench boxes are valid");
    }
    idx
}

/// O(N^2) reference with the same raw semantics as `all_collisions`.
fn brute_force_pairs(idx: &Index) -> Vec<Pair> {
    let mut out = Vec::new();
    for a in idx.leaves() {
        let ra = idx.rect(a).expect("live handle");
        for b in idx.leaves() {
            let rb = idx.rect(b).expect("live handle");
            if overlaps(&ra, &rb) {
                out.push((a, b));
            }
        }
    }
    out
}

fn bench_all_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_collisions");
    for &count in &[100_usize, 400, 1600] {
        let boxes = gen_random_boxes(count, 2000.0, 8.0);
        let idx = build_index(&boxes);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("tree/{count}"), |b| {
            b.iter(|| black_box(idx.all_collisions()));
        });
        group.bench_function(format!("brute/{count}"), |b| {
            b.iter(|| black_box(brute_force_pairs(&idx)));
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_collisions_clustered");
    for &(clusters, per) in &[(10_usize, 40_usize), (40, 40)] {
        let count = clusters * per;
        let boxes = gen_clustered_boxes(clusters, per, 60.0);
        let idx = build_index(&boxes);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("tree/{count}"), |b| {
            b.iter(|| black_box(idx.colliding_pairs()));
        });
        group.bench_function(format!("brute/{count}"), |b| {
            b.iter(|| black_box(brute_force_pairs(&idx)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_all_collisions, bench_clustered);
criterion_main!(benches);
