// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API: validated box construction and pair queries.

use alloc::vec::Vec;
use kurbo::Rect;

use broadphase_tree::{LeafId, Tree};

use crate::error::Error;

/// A colliding pair of leaves.
///
/// Pairs from [`Index::collisions_for`] and [`Index::all_collisions`] are
/// oriented: the query leaf comes first. Pairs from
/// [`Index::colliding_pairs`] are oriented by insertion order instead.
pub type Pair = (LeafId, LeafId);

/// Broad-phase collision index.
///
/// Owns a [`Tree`] and the flat registry of every box ever created. Boxes are
/// registered with [`Index::make_box`] and never removed or moved; queries
/// report candidate pairs by overlap of their axis-aligned bounds.
#[derive(Debug, Default)]
pub struct Index {
    tree: Tree,
}

impl Index {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Register a box occupying `[x, x + length] x [y, y + height]` and insert
    /// it into the tree. Returns a handle usable in later queries.
    ///
    /// The minimum corner may be anywhere (any sign or magnitude); the extents
    /// must be positive and finite.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] if `length` or `height` is zero, negative,
    /// or not finite (NaN included).
    pub fn make_box(&mut self, x: f64, y: f64, length: f64, height: f64) -> Result<LeafId, Error> {
        if !(length.is_finite() && height.is_finite()) || length <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidGeometry { length, height });
        }
        Ok(self.tree.insert(Rect::new(x, y, x + length, y + height)))
    }

    /// Everything colliding with one box, as `(id, hit)` pairs.
    ///
    /// The box itself is in the tree, so the self pair `(id, id)` is always
    /// among the results. No deduplication of any kind is applied.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLeaf`] if `id` was not issued by this index.
    pub fn collisions_for(&self, id: LeafId) -> Result<Vec<Pair>, Error> {
        let rect = self.tree.rect(id).ok_or(Error::UnknownLeaf(id))?;
        Ok(self
            .tree
            .query(rect)
            .into_iter()
            .map(|hit| (id, hit))
            .collect())
    }

    /// All collisions across the index: [`Index::collisions_for`] run over
    /// every leaf in insertion order, concatenated.
    ///
    /// By construction the output is raw: every colliding pair appears twice,
    /// once per orientation, and every leaf contributes one self pair. Callers
    /// that want each pair once should use [`Index::colliding_pairs`].
    pub fn all_collisions(&self) -> Vec<Pair> {
        let mut out = Vec::new();
        for (id, rect) in self.tree.leaf_rects() {
            out.extend(self.tree.query(rect).into_iter().map(|hit| (id, hit)));
        }
        out
    }

    /// Each unordered colliding pair exactly once, self pairs excluded.
    ///
    /// Pairs are oriented `(earlier, later)` by insertion order. This is a
    /// deliberate companion to [`Index::all_collisions`], which preserves the
    /// raw duplicated output for compatibility.
    pub fn colliding_pairs(&self) -> Vec<Pair> {
        let mut out = Vec::new();
        for (id, rect) in self.tree.leaf_rects() {
            for hit in self.tree.query(rect) {
                if id < hit {
                    out.push((id, hit));
                }
            }
        }
        out
    }

    /// Bounds of a registered box, or `None` for a foreign handle.
    pub fn rect(&self, id: LeafId) -> Option<Rect> {
        self.tree.rect(id)
    }

    /// Iterate all handles in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = LeafId> + '_ {
        self.tree.leaves()
    }

    /// Number of boxes registered so far.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True if no box has been registered.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Read-only access to the underlying tree, for custom traversals.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}
