// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: leaf handles and the overlap primitive.

use kurbo::Rect;

/// Identifier for a leaf in the tree.
///
/// This is a small, copyable handle returned by [`Tree::insert`](crate::Tree::insert).
/// Leaves are append-only and never removed, so a `LeafId` stays valid for the
/// lifetime of the tree that issued it. Handles from one tree carry no meaning
/// in another; passing a foreign handle to an accessor simply yields `None`.
///
/// `LeafId` orders by insertion: an id issued later compares greater. Downstream
/// collision queries rely on this for deterministic pair orientation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LeafId(pub(crate) u32);

impl LeafId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Leaf slots are intentionally 32-bit; higher bits are truncated by design."
    )]
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot as u32)
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Whether two rectangles overlap with positive area.
///
/// Strict on both axes: rectangles that merely share an edge or a corner do
/// not overlap. Symmetric, and reflexive for rectangles with positive extents.
/// Assumes no NaN coordinates.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
