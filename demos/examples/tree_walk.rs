// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk the tree structure directly.
//!
//! Inserts a handful of boxes, then prints the branch/leaf structure with
//! bounds, using the read-only traversal surface.
//!
//! Run:
//! - `cargo run -p broadphase_demos --example tree_walk`

use broadphase_tree::{NodeRef, Tree};
use kurbo::Rect;

fn dump(tree: &Tree, node: NodeRef, depth: usize) {
    let pad = "  ".repeat(depth);
    let rect = tree.node_rect(node);
    if tree.is_branch(node) {
        println!("{pad}branch {rect:?}");
        let (left, right) = tree.children(node);
        for child in [left, right].into_iter().flatten() {
            dump(tree, child, depth + 1);
        }
    } else {
        println!("{pad}leaf {:?} {rect:?}", tree.leaf_id(node).expect("leaf"));
    }
}

fn main() {
    let mut tree = Tree::new();
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (100.0, 100.0), (103.0, 100.0), (1.0, 1.0)] {
        let _ = tree.insert(Rect::new(x, y, x + 2.0, y + 2.0));
    }

    match tree.root() {
        Some(root) => dump(&tree, root, 0),
        None => println!("empty tree"),
    }

    // Probe near the first cluster.
    println!("hits near origin: {:?}", tree.query(Rect::new(0.5, 0.5, 2.5, 1.5)));
}
