/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{GraphError, RandomAccessGraph};

/// An implicit three-dimensional lattice.
///
/// The nodes of a lattice of side `n` are the triples `(i, j, k)` in `[0..n)³`,
/// numbered as `i·n² + j·n + k`. There is an arc from a node to each node
/// obtained by increasing exactly one of its coordinates by one, provided the
/// result is still in the lattice; thus, the distance of `(i, j, k)` from
/// `(0, 0, 0)` is `i + j + k`.
///
/// Arcs are never stored: successors and outdegrees are computed in constant
/// time and space from the coordinates of a node.
///
/// # Examples
///
/// ```
/// use scanbfs::prelude::*;
///
/// let graph = LatticeGraph::new(3)?;
/// assert_eq!(graph.num_nodes(), 27);
/// let node = graph.node(1, 2, 0);
/// assert_eq!(graph.coords(node), (1, 2, 0));
/// // k can grow, j cannot, i can
/// assert_eq!(
///     graph.successors(node).collect::<Vec<_>>(),
///     [graph.node(1, 2, 1), graph.node(2, 2, 0)]
/// );
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeGraph {
    side: usize,
    /// `side²`, cached as it is needed at every access.
    side_sq: usize,
    num_nodes: usize,
}

impl LatticeGraph {
    /// Creates a lattice with `side³` nodes.
    ///
    /// A side of zero yields the empty graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LatticeTooLarge`] if `side³` does not fit a
    /// `usize`.
    pub fn new(side: usize) -> Result<Self, GraphError> {
        let side_sq = side.checked_mul(side);
        let num_nodes = side_sq.and_then(|side_sq| side_sq.checked_mul(side));
        match (side_sq, num_nodes) {
            (Some(side_sq), Some(num_nodes)) => Ok(Self {
                side,
                side_sq,
                num_nodes,
            }),
            _ => Err(GraphError::LatticeTooLarge { side }),
        }
    }

    /// Returns the side of the lattice.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the node with the given coordinates.
    #[inline(always)]
    pub fn node(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.side && j < self.side && k < self.side);
        i * self.side_sq + j * self.side + k
    }

    /// Returns the coordinates `(i, j, k)` of a node.
    #[inline(always)]
    pub fn coords(&self, node: usize) -> (usize, usize, usize) {
        debug_assert!(node < self.num_nodes);
        (
            node / self.side_sq,
            (node / self.side) % self.side,
            node % self.side,
        )
    }
}

impl RandomAccessGraph for LatticeGraph {
    type Successors<'succ> = Succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of arcs: each of the three axes contributes
    /// `side²·(side - 1)` arcs.
    fn num_arcs_hint(&self) -> Option<u64> {
        if self.side == 0 {
            return Some(0);
        }
        u64::try_from(self.side_sq)
            .ok()?
            .checked_mul(3)?
            .checked_mul(self.side as u64 - 1)
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> Succ {
        let (i, j, k) = self.coords(node_id);
        Succ {
            node: node_id,
            coords: [k, j, i],
            strides: [1, self.side, self.side_sq],
            side: self.side,
            axis: 0,
        }
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        let (i, j, k) = self.coords(node_id);
        [i, j, k]
            .into_iter()
            .filter(|&coord| coord + 1 < self.side)
            .count()
    }
}

/// Iterator over the successors of a node of a [`LatticeGraph`].
///
/// Successors are returned by increasing axis stride: first the node with
/// `k + 1`, then `j + 1`, then `i + 1`.
#[derive(Debug, Clone)]
pub struct Succ {
    node: usize,
    /// Coordinates in stride order, that is, `[k, j, i]`.
    coords: [usize; 3],
    strides: [usize; 3],
    side: usize,
    /// Next axis to examine.
    axis: usize,
}

impl Iterator for Succ {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        while self.axis < 3 {
            let axis = self.axis;
            self.axis += 1;
            if self.coords[axis] + 1 < self.side {
                return Some(self.node + self.strides[axis]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Succ {
    fn len(&self) -> usize {
        self.coords[self.axis.min(3)..]
            .iter()
            .filter(|&&coord| coord + 1 < self.side)
            .count()
    }
}
