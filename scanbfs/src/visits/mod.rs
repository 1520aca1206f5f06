/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! A [`Traversal`] computes, for a given source node, the vector of distances
//! (in arcs) of all nodes from the source. Nodes that cannot be reached from
//! the source have distance [`UNREACHABLE`].
//!
//! All implementations must return exactly the same vector for the same graph
//! and source: [`Seq`](breadth_first::Seq) is the sequential reference, and
//! [`ParScan`](breadth_first::ParScan) is the parallel visit validated against
//! it.
//!
//! Traversals keep no state between calls: the same traversal (and the same
//! graph) can be used any number of times, from any source.

pub mod breadth_first;

use crate::traits::{GraphError, RandomAccessGraph};

/// The distance of nodes that cannot be reached from the source.
///
/// Graphs must have diameter smaller than this value, which is never
/// returned as an actual distance.
pub const UNREACHABLE: usize = usize::MAX;

/// A single-source shortest-path visit on unweighted graphs.
pub trait Traversal {
    /// Returns the distances of all nodes from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidNode`] if `source` is not a node of the
    /// graph.
    ///
    /// # Panics
    ///
    /// Panics if the graph returns a successor that is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes). Graphs of unknown
    /// provenance can be validated once with
    /// [`check_impl`](crate::traits::check_impl) before being visited.
    fn traverse(&self, source: usize) -> Result<Vec<usize>, GraphError>;
}

/// Returns the distances of all nodes from `source` using a
/// [sequential visit](breadth_first::Seq).
pub fn seq_distances<G: RandomAccessGraph>(
    graph: G,
    source: usize,
) -> Result<Vec<usize>, GraphError> {
    breadth_first::Seq::new(graph).traverse(source)
}

/// Returns the distances of all nodes from `source` using a
/// [parallel visit](breadth_first::ParScan) on the current
/// [Rayon](rayon) thread pool.
pub fn par_distances<G: RandomAccessGraph + Sync>(
    graph: G,
    source: usize,
) -> Result<Vec<usize>, GraphError> {
    breadth_first::ParScan::new(graph).traverse(source)
}

/// Checks that `node` is a node of a graph with `num_nodes` nodes.
pub(crate) fn check_node(node: usize, num_nodes: usize) -> Result<(), GraphError> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(GraphError::InvalidNode { node, num_nodes })
    }
}
