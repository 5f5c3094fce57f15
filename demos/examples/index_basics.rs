// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision index basics.
//!
//! Register a few boxes, then run both pair queries.
//!
//! Run:
//! - `cargo run -p broadphase_demos --example index_basics`

use broadphase_index::Index;

fn main() {
    let mut idx = Index::new();

    // Two overlapping boxes and one off on its own.
    let a = idx.make_box(0.0, 0.0, 1.0, 1.0).expect("valid box");
    let b = idx.make_box(0.5, 0.0, 1.0, 1.0).expect("valid box");
    let c = idx.make_box(5.0, 5.0, 1.0, 1.0).expect("valid box");

    // Raw output: self pairs plus both orientations of (a, b).
    println!("all_collisions:");
    for (x, y) in idx.all_collisions() {
        println!("  {x:?} <-> {y:?}");
    }

    // Deduplicated: each unordered pair once, no self pairs.
    println!("colliding_pairs: {:?}", idx.colliding_pairs());

    // Per-box query.
    println!("collisions_for(a): {:?}", idx.collisions_for(a).expect("live handle"));
    println!("collisions_for(b): {:?}", idx.collisions_for(b).expect("live handle"));
    println!("collisions_for(c): {:?}", idx.collisions_for(c).expect("live handle"));

    // Degenerate extents are rejected up front.
    println!("zero extent -> {:?}", idx.make_box(0.0, 0.0, 0.0, 1.0));
}
