// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadphase Index: the client-facing broad-phase collision API.
//!
//! This crate layers a small, validated API on top of [`broadphase_tree`]:
//!
//! - [`Index::make_box`] validates extents, builds the rectangle, and inserts
//!   it into the tree, returning a stable [`LeafId`] handle.
//! - [`Index::collisions_for`] reports everything overlapping one box.
//! - [`Index::all_collisions`] reports every collision in the index, raw:
//!   both orientations of each pair plus one self pair per box.
//! - [`Index::colliding_pairs`] is the deduplicated companion: each unordered
//!   pair once, no self pairs.
//!
//! Boxes are append-only; there is no removal or movement. The index is a
//! single-owner, single-threaded structure; callers using it across threads
//! must serialize access externally.
//!
//! # Example
//!
//! ```rust
//! use broadphase_index::Index;
//!
//! let mut idx = Index::new();
//! let a = idx.make_box(0.0, 0.0, 1.0, 1.0)?;
//! let b = idx.make_box(0.5, 0.0, 1.0, 1.0)?;
//! let c = idx.make_box(5.0, 5.0, 1.0, 1.0)?;
//!
//! // `a` and `b` overlap; `c` is off on its own.
//! assert_eq!(idx.colliding_pairs(), vec![(a, b)]);
//!
//! // The raw query keeps self pairs and both orientations.
//! let all = idx.all_collisions();
//! assert!(all.contains(&(a, b)) && all.contains(&(b, a)) && all.contains(&(c, c)));
//! # Ok::<(), broadphase_index::Error>(())
//! ```
//!
//! Zero, negative, or NaN extents are rejected at construction:
//!
//! ```rust
//! use broadphase_index::{Error, Index};
//!
//! let mut idx = Index::new();
//! assert!(matches!(
//!     idx.make_box(0.0, 0.0, -1.0, 1.0),
//!     Err(Error::InvalidGeometry { .. })
//! ));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod index;

pub use broadphase_tree::{LeafId, NodeRef, Tree, overlaps};
pub use error::Error;
pub use index::{Index, Pair};
