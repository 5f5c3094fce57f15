// Copyright 2026 the Broadphase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, best-sibling insertion, pruned queries.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{LeafId, overlaps};

/// Arena index of a node. Distinct from [`LeafId`]: branches never get handles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug)]
enum Kind {
    Leaf {
        slot: usize,
    },
    /// Insertion only ever creates branches with both children present, but a
    /// child slot may be empty in hand-built or partially spliced trees.
    /// Traversals skip an empty slot; they never treat it as a zero-cost match.
    Branch {
        left: Option<NodeIdx>,
        right: Option<NodeIdx>,
    },
}

#[derive(Clone, Debug)]
struct Node {
    rect: Rect,
    /// Non-owning back-reference; only the root has none.
    parent: Option<NodeIdx>,
    kind: Kind,
}

/// Opaque reference to any node (leaf or branch), for composing custom traversals.
///
/// Obtained from [`Tree::root`] and [`Tree::children`]; always refers to a live
/// node of the tree that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeRef(usize);

/// Dynamic bounding-volume tree over 2D axis-aligned boxes.
///
/// Nodes live in an arena (`Vec` + integer indices) so parent back-references
/// never form ownership cycles. Leaves are the client boxes; branches bound
/// their subtree and carry no other geometry semantics. The tree is built one
/// leaf at a time: [`Tree::insert`] finds the cheapest sibling to pair with,
/// splices in a fresh branch, and repairs ancestor bounds up to the root.
/// There is no removal and no rebalancing beyond that single-insertion repair.
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeIdx>,
    /// Every leaf ever inserted, in insertion order. Append-only.
    leaves: Vec<NodeIdx>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("leaves", &self.leaves.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            leaves: Vec::new(),
        }
    }

    /// Number of leaves inserted so far.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True if no leaf has been inserted.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Bounding rectangle of a leaf, or `None` for a handle this tree never issued.
    pub fn rect(&self, id: LeafId) -> Option<Rect> {
        let idx = *self.leaves.get(id.slot())?;
        Some(self.nodes[idx.get()].rect)
    }

    /// Iterate all leaf handles in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = LeafId> + '_ {
        (0..self.leaves.len()).map(LeafId::new)
    }

    /// Iterate `(handle, rect)` for all leaves in insertion order.
    pub fn leaf_rects(&self) -> impl Iterator<Item = (LeafId, Rect)> + '_ {
        self.leaves
            .iter()
            .enumerate()
            .map(|(slot, idx)| (LeafId::new(slot), self.nodes[idx.get()].rect))
    }

    /// Insert a leaf with the given bounds. O(depth).
    ///
    /// The rect must have positive extents; validating client input is the
    /// caller's job (see `broadphase_index`), a degenerate rect here is a
    /// programming error because it would corrupt every ancestor union.
    pub fn insert(&mut self, rect: Rect) -> LeafId {
        debug_assert!(
            rect.width() > 0.0 && rect.height() > 0.0,
            "leaf rect must have positive extents"
        );
        let slot = self.leaves.len();
        let leaf = self.alloc(Node {
            rect,
            parent: None,
            kind: Kind::Leaf { slot },
        });
        match self.root {
            None => self.root = Some(leaf),
            Some(root) => self.attach(leaf, root),
        }
        self.leaves.push(leaf);
        LeafId::new(slot)
    }

    /// Leaves whose bounds overlap `rect`, pruning non-overlapping subtrees.
    ///
    /// No self-exclusion is performed: querying with the exact rect of a stored
    /// leaf reports that leaf.
    pub fn query(&self, rect: Rect) -> Vec<LeafId> {
        let mut out = Vec::new();
        let Some(root) = self.root else {
            return out;
        };
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx.get()];
            if !overlaps(&rect, &node.rect) {
                continue;
            }
            match node.kind {
                Kind::Leaf { slot } => out.push(LeafId::new(slot)),
                Kind::Branch { left, right } => {
                    stack.extend(left);
                    stack.extend(right);
                }
            }
        }
        out
    }

    // ---- Custom traversal surface ----

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef> {
        self.root.map(|idx| NodeRef(idx.get()))
    }

    /// Bounding rectangle of any node. For a branch this is the union of its
    /// present children's rectangles.
    pub fn node_rect(&self, node: NodeRef) -> Rect {
        self.nodes[node.0].rect
    }

    /// Whether the node is a branch (internal grouping node).
    pub fn is_branch(&self, node: NodeRef) -> bool {
        matches!(self.nodes[node.0].kind, Kind::Branch { .. })
    }

    /// Children of a branch; both `None` for a leaf, either may be `None` for
    /// a partially built branch.
    pub fn children(&self, node: NodeRef) -> (Option<NodeRef>, Option<NodeRef>) {
        match self.nodes[node.0].kind {
            Kind::Leaf { .. } => (None, None),
            Kind::Branch { left, right } => (
                left.map(|idx| NodeRef(idx.get())),
                right.map(|idx| NodeRef(idx.get())),
            ),
        }
    }

    /// The leaf handle of a node, or `None` for a branch.
    pub fn leaf_id(&self, node: NodeRef) -> Option<LeafId> {
        match self.nodes[node.0].kind {
            Kind::Leaf { slot } => Some(LeafId::new(slot)),
            Kind::Branch { .. } => None,
        }
    }

    // ---- Internals ----

    fn alloc(&mut self, node: Node) -> NodeIdx {
        let idx = NodeIdx(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Pair `leaf` with the best sibling under `root` and repair ancestor bounds.
    fn attach(&mut self, leaf: NodeIdx, root: NodeIdx) {
        let leaf_rect = self.nodes[leaf.get()].rect;
        let sibling = self.best_sibling(leaf_rect, root);

        let old_parent = self.nodes[sibling.get()].parent;
        let branch = self.alloc(Node {
            rect: leaf_rect.union(self.nodes[sibling.get()].rect),
            parent: old_parent,
            kind: Kind::Branch {
                left: Some(sibling),
                right: Some(leaf),
            },
        });
        self.nodes[sibling.get()].parent = Some(branch);
        self.nodes[leaf.get()].parent = Some(branch);

        match old_parent {
            None => self.root = Some(branch),
            Some(parent) => {
                // Rewrite whichever child slot held the sibling, by index identity.
                let Kind::Branch { left, right } = &mut self.nodes[parent.get()].kind else {
                    unreachable!("parent of a spliced node must be a branch");
                };
                if *left == Some(sibling) {
                    *left = Some(branch);
                } else {
                    debug_assert_eq!(
                        *right,
                        Some(sibling),
                        "sibling's parent must hold it in a child slot"
                    );
                    *right = Some(branch);
                }
            }
        }

        self.refit_from(branch);
    }

    /// Descend from `root` to the cheapest node to pair a new leaf with.
    ///
    /// Surface-area heuristic in the usual incremental-BVH form: at each branch,
    /// pairing here costs the doubled area of the union with the whole node;
    /// descending into a child costs that child's enlargement plus the
    /// enlargement inherited by every ancestor on the way down. Stops as soon
    /// as pairing here beats every viable descent.
    fn best_sibling(&self, leaf_rect: Rect, root: NodeIdx) -> NodeIdx {
        let mut sibling = root;
        loop {
            let node = &self.nodes[sibling.get()];
            let (left, right) = match node.kind {
                Kind::Leaf { .. } => return sibling,
                Kind::Branch { left, right } => (left, right),
            };

            let combined = leaf_rect.union(node.rect);
            let cost_here = 2.0 * combined.area();
            let inherited = 2.0 * (combined.area() - node.rect.area());

            // Cheapest present child; an absent child is excluded from the
            // comparison, not treated as a free slot.
            let mut descend: Option<(NodeIdx, f64)> = None;
            for child in [left, right].into_iter().flatten() {
                let cost = self.descend_cost(child, leaf_rect, inherited);
                if descend.is_none_or(|(_, best)| cost < best) {
                    descend = Some((child, cost));
                }
            }

            match descend {
                // Childless branch: nothing to descend into, pair with it.
                None => return sibling,
                Some((child, child_cost)) => {
                    if cost_here < child_cost {
                        return sibling;
                    }
                    sibling = child;
                }
            }
        }
    }

    /// Lower bound on the total cost of placing the new leaf somewhere in
    /// `child`'s subtree: exact for a leaf, enlargement-only for a branch.
    fn descend_cost(&self, child: NodeIdx, leaf_rect: Rect, inherited: f64) -> f64 {
        let node = &self.nodes[child.get()];
        let combined = leaf_rect.union(node.rect);
        match node.kind {
            Kind::Leaf { .. } => combined.area() + inherited,
            Kind::Branch { .. } => (combined.area() - node.rect.area()) + inherited,
        }
    }

    /// Recompute bounds from `start` up to the root (inclusive) as the union
    /// of each branch's present children.
    fn refit_from(&mut self, start: NodeIdx) {
        let mut at = Some(start);
        while let Some(idx) = at {
            if let Kind::Branch { left, right } = self.nodes[idx.get()].kind {
                match (left, right) {
                    (Some(l), Some(r)) => {
                        self.nodes[idx.get()].rect =
                            self.nodes[l.get()].rect.union(self.nodes[r.get()].rect);
                    }
                    (Some(only), None) | (None, Some(only)) => {
                        self.nodes[idx.get()].rect = self.nodes[only.get()].rect;
                    }
                    // A childless branch keeps whatever bounds it was built with.
                    (None, None) => {}
                }
            }
            at = self.nodes[idx.get()].parent;
        }
    }
}
