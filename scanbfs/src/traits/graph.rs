/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic trait to access graphs in random-access fashion.

A [random-access graph](RandomAccessGraph) exposes its number of nodes, and
for each node its [successors](RandomAccessGraph::successors) and its
[outdegree](RandomAccessGraph::outdegree). Nodes are identified by the
integers in `[0..num_nodes)`.

Implementations must satisfy two invariants that visits rely on:

- the outdegree of a node is equal to the number of successors returned by
  [`successors`](RandomAccessGraph::successors);
- every successor is smaller than [`num_nodes`](RandomAccessGraph::num_nodes).

Explicit graphs check the second invariant when they are built. The function
[`check_impl`] checks both invariants on arbitrary implementations.

*/

use impl_tools::autoimpl;
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to nodes and graphs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node passed by the caller is not a node of the graph.
    #[error("Node {node} does not exist (the graph has {num_nodes} nodes)")]
    InvalidNode {
        /// The offending node.
        node: usize,
        /// The number of nodes of the graph.
        num_nodes: usize,
    },
    /// A successor list contains a node that is not a node of the graph.
    #[error("Successor {succ} of node {node} does not exist (the graph has {num_nodes} nodes)")]
    InvalidSuccessor {
        /// The node whose successor list is broken.
        node: usize,
        /// The offending successor.
        succ: usize,
        /// The number of nodes of the graph.
        num_nodes: usize,
    },
    /// The outdegree of a node is not the number of its successors.
    #[error("Different outdegree for node {node}: {outdegree} (outdegree) != {successors} (successors)")]
    OutdegreeMismatch {
        /// The node.
        node: usize,
        /// The value returned by [`outdegree`](RandomAccessGraph::outdegree).
        outdegree: usize,
        /// The number of successors actually returned.
        successors: usize,
    },
    /// The number of nodes of a lattice does not fit a `usize`.
    #[error("A lattice of side {side} has too many nodes")]
    LatticeTooLarge {
        /// The requested side.
        side: usize,
    },
}

/// A graph providing random access to successor lists.
///
/// Visits depend only on this trait, so implicit graphs (whose arcs are
/// computed on the fly) and explicit graphs (whose successor lists are
/// stored) are interchangeable.
///
/// The order in which successors are returned is not specified, but it must
/// be the same on every call for the same node.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>, Arc<S>)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node
    /// returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph, if available.
    fn num_arcs_hint(&self) -> Option<u64> {
        None
    }

    /// Returns the successors of a node.
    fn successors(&self, node_id: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node_id: usize) -> usize;

    /// Returns whether there is an arc going from `src_node_id` to `dst_node_id`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src_node_id: usize, dst_node_id: usize) -> bool {
        self.successors(src_node_id)
            .into_iter()
            .any(|succ| succ == dst_node_id)
    }
}

/// Checks that a graph satisfies the invariants of [`RandomAccessGraph`].
///
/// The check enumerates all arcs once, so it is meant to be run once per
/// input rather than during visits.
pub fn check_impl<G: RandomAccessGraph>(graph: G) -> Result<(), GraphError> {
    let num_nodes = graph.num_nodes();
    for node in 0..num_nodes {
        let mut successors = 0;
        for succ in graph.successors(node) {
            if succ >= num_nodes {
                return Err(GraphError::InvalidSuccessor {
                    node,
                    succ,
                    num_nodes,
                });
            }
            successors += 1;
        }
        let outdegree = graph.outdegree(node);
        if outdegree != successors {
            return Err(GraphError::OutdegreeMismatch {
                node,
                outdegree,
                successors,
            });
        }
    }
    Ok(())
}
