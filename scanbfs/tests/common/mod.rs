/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use scanbfs::prelude::*;

/// Canonical test graph (8 nodes, 11 arcs).
///
/// - Outdegree 0: node 7 (sink)
/// - Outdegree 1: nodes 2, 3, 4, 6
/// - Outdegree 2: nodes 0, 5
/// - Outdegree 3: node 1
/// - Indegree 0: node 0 (source)
/// - Cycle: 2 → 4 → 6 → 2
pub fn test_graph() -> VecGraph {
    VecGraph::from_arcs([
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (1, 5),
        (2, 4),
        (3, 6),
        (4, 6),
        (5, 6),
        (5, 7),
        (6, 2),
    ])
}

/// The six-node graph used by the command-line checks.
///
/// Node 4 has an arc back to the source, and node 5 is a sink. From 0 the
/// distances are `[0, 1, 1, 2, 3, 4]`.
pub fn scenario_graph() -> VecGraph {
    VecGraph::from_lists([
        vec![1, 2],
        vec![2, 3],
        vec![3],
        vec![4],
        vec![0, 1, 5],
        vec![],
    ])
    .expect("scenario graph is well formed")
}

/// Computes distances level by level, without queues or bit vectors.
pub fn correct_distances<G: RandomAccessGraph>(graph: &G, start: usize) -> Vec<usize> {
    let mut distances = vec![UNREACHABLE; graph.num_nodes()];
    let mut current_frontier = vec![start];
    let mut next_frontier = Vec::new();
    let mut distance = 1;
    distances[start] = 0;

    while !current_frontier.is_empty() {
        for node in current_frontier {
            for succ in graph.successors(node) {
                if distances[succ] == UNREACHABLE {
                    next_frontier.push(succ);
                    distances[succ] = distance;
                }
            }
        }
        current_frontier = next_frontier;
        next_frontier = Vec::new();
        distance += 1;
    }

    distances
}
