// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadphase Tree: a Kurbo-native dynamic AABB tree.
//!
//! This is the broad-phase core of a 2D collision pipeline: a balanced-enough
//! binary tree of axis-aligned bounding boxes that makes overlap queries
//! sub-linear.
//!
//! - [`Tree::insert`] places each new leaf next to the cheapest sibling
//!   (surface-area heuristic) and repairs ancestor bounds up to the root.
//! - [`Tree::query`] walks from the root and prunes every subtree whose
//!   bounds do not overlap the probe.
//! - [`overlaps`] is the strict rectangle test the tree is built on:
//!   edge-touching boxes do not collide.
//!
//! Leaves are append-only; there is no removal, movement, or rebalancing.
//! The tree is a single-owner, single-threaded structure. Callers wanting a
//! collision-pair API with validated construction and stable handles should
//! use `broadphase_index`, which layers on this crate.
//!
//! Float inputs are assumed finite (no NaNs); debug builds assert on
//! degenerate leaf rects.
//!
//! # Example
//!
//! ```rust
//! use broadphase_tree::Tree;
//! use kurbo::Rect;
//!
//! let mut tree = Tree::new();
//! let a = tree.insert(Rect::new(0.0, 0.0, 1.0, 1.0));
//! let _b = tree.insert(Rect::new(2.0, 0.0, 3.0, 1.0));
//!
//! // Only `a` overlaps the probe; the other subtree is pruned.
//! let hits = tree.query(Rect::new(0.5, 0.5, 1.5, 0.75));
//! assert_eq!(hits, vec![a]);
//! ```
//!
//! For custom traversals, [`Tree::root`], [`Tree::children`], and
//! [`Tree::is_branch`] expose the node structure read-only via [`NodeRef`].

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{NodeRef, Tree};
pub use types::{LeafId, overlaps};
