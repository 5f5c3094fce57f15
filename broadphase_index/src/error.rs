// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the collision index.

use broadphase_tree::LeafId;
use thiserror::Error;

/// Failures surfaced by [`Index`](crate::Index) operations.
///
/// These are the only user-facing failure classes. Internal invariant
/// violations (dangling links, a sibling search failing on a non-empty tree)
/// are programming errors and assert instead.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A box was constructed with non-positive or non-finite extents. Rejected
    /// up front: a degenerate rectangle would corrupt every ancestor union in
    /// the tree.
    #[error("invalid box geometry: extents {length} x {height} must be positive and finite")]
    InvalidGeometry {
        /// Extent along x as supplied by the caller.
        length: f64,
        /// Extent along y as supplied by the caller.
        height: f64,
    },
    /// A handle that this index never issued.
    #[error("leaf handle {0:?} does not belong to this index")]
    UnknownLeaf(LeafId),
}
