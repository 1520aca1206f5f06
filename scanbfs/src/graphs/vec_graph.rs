/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{GraphError, RandomAccessGraph};

/// A [`RandomAccessGraph`] implementation based on a vector of vectors.
///
/// Successor lists are stored explicitly, so this graph can represent any
/// topology, including nodes with no arcs at all. Successors are returned in
/// the order in which they were supplied.
///
/// Duplicate successors and self-loops are not rejected: visits handle them
/// correctly, but they cost time, so avoiding them is the responsibility of
/// the caller.
///
/// # Examples
///
/// ```
/// use scanbfs::prelude::*;
///
/// let graph = VecGraph::from_lists([vec![1, 2], vec![2], vec![]])?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 3);
/// assert_eq!(graph.successors(0).collect::<Vec<_>>(), [1, 2]);
///
/// assert!(VecGraph::from_lists([vec![1], vec![7]]).is_err());
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Creates a graph from its successor lists.
    ///
    /// The number of nodes is the number of lists; the list in position `x`
    /// contains the successors of node `x`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSuccessor`] if some successor is not
    /// smaller than the number of lists.
    pub fn from_lists(lists: impl IntoIterator<Item = Vec<usize>>) -> Result<Self, GraphError> {
        let succ = lists.into_iter().collect::<Vec<_>>();
        let num_nodes = succ.len();
        let mut num_arcs = 0;
        for (node, list) in succ.iter().enumerate() {
            if let Some(&succ) = list.iter().find(|&&succ| succ >= num_nodes) {
                return Err(GraphError::InvalidSuccessor {
                    node,
                    succ,
                    num_nodes,
                });
            }
            num_arcs += list.len() as u64;
        }
        Ok(Self { num_arcs, succ })
    }

    /// Adds an isolated node to the graph, if necessary, and returns true if
    /// it is a new node.
    ///
    /// Nodes between the current number of nodes and `node` are added, too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc to the graph.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        self.succ[u].push(v);
        self.num_arcs += 1;
    }

    /// Adds arcs from an [`IntoIterator`] of pairs, adding new nodes as
    /// needed.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in arcs {
            self.add_node(u.max(v));
            self.add_arc(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of pairs.
    ///
    /// The number of nodes is one plus the largest node appearing in an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_arcs(arcs);
        g
    }

    /// Returns the number of arcs in the graph.
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> = core::iter::Copied<core::slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs_hint(&self) -> Option<u64> {
        Some(self.num_arcs)
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> Self::Successors<'_> {
        self.succ[node_id].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        self.succ[node_id].len()
    }
}
