/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{GraphError, RandomAccessGraph};
use crate::visits::{check_node, Traversal, UNREACHABLE};
use std::collections::VecDeque;
use sux::prelude::*;

/// A sequential breadth-first visit.
///
/// This is the classical textbook algorithm: nodes are extracted from a FIFO
/// queue, and each unknown successor of an extracted node gets the distance
/// of the node plus one and is appended to the queue. The visit takes time
/// linear in the number of nodes and arcs, and it is the reference against
/// which [parallel visits](super::ParScan) are checked.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use scanbfs::prelude::*;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3), (4, 0)]);
/// let visit = breadth_first::Seq::new(&graph);
/// assert_eq!(visit.traverse(0)?, [0, 1, 2, 2, UNREACHABLE]);
/// assert_eq!(visit.traverse(4)?, [1, 2, 3, 3, 0]);
/// # Ok::<(), GraphError>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

impl<G: RandomAccessGraph> Traversal for Seq<G> {
    fn traverse(&self, source: usize) -> Result<Vec<usize>, GraphError> {
        let num_nodes = self.graph.num_nodes();
        check_node(source, num_nodes)?;

        let mut visited = BitVec::new(num_nodes);
        let mut distances = vec![UNREACHABLE; num_nodes];
        let mut queue = VecDeque::new();

        visited.set(source, true);
        distances[source] = 0;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let distance = distances[node] + 1;
            for succ in self.graph.successors(node) {
                if !visited[succ] {
                    visited.set(succ, true);
                    distances[succ] = distance;
                    queue.push_back(succ);
                }
            }
        }

        Ok(distances)
    }
}
