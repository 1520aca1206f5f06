/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{GraphError, RandomAccessGraph};
use crate::utils::{par_exclusive_scan, par_filter, par_map, ClaimSet, Granularity};
use crate::visits::{check_node, Traversal, UNREACHABLE};
use log::debug;
use rayon::prelude::*;
use sync_cell_slice::SyncSlice;

/// Marker for the slots of the next-frontier buffer that have not been
/// filled. It is never a node, as nodes are smaller than
/// [`num_nodes`](RandomAccessGraph::num_nodes).
const EMPTY: usize = usize::MAX;

/// Level-synchronous parallel breadth-first visits based on prefix sums.
///
/// The visit proceeds by levels: the frontier at level `d` contains exactly
/// the nodes at distance `d` from the source. Each [step](ParScan::step)
/// builds the next frontier using only data-parallel primitives:
///
/// 1. the frontier is [mapped](par_map) to the outdegrees of its nodes;
/// 2. an [exclusive prefix sum](par_exclusive_scan) of the outdegrees assigns
///    to each frontier node a disjoint range of slots in a buffer large
///    enough to contain all successors of the frontier;
/// 3. in parallel, each frontier node tries to [claim](ClaimSet::claim) each
///    of its successors; the successors it wins get their distance and are
///    written in the node's range of slots;
/// 4. the buffer is [filtered](par_filter) to remove the unused slots,
///    yielding the next frontier.
///
/// Since a node can be claimed only once, it is written exactly once in
/// exactly one frontier, and its distance is set exactly once, no matter how
/// many frontier nodes (or duplicate arcs) lead to it. No locks are used.
///
/// The visit runs on the current [Rayon](rayon) thread pool; use
/// [`ThreadPool::install`](rayon::ThreadPool::install) to choose a pool.
///
/// # Examples
///
/// ```
/// use scanbfs::prelude::*;
/// use scanbfs::thread_pool;
///
/// let graph = LatticeGraph::new(3)?;
/// let visit = breadth_first::ParScan::new(&graph);
/// let distances = thread_pool![4].install(|| visit.traverse(0))?;
/// assert_eq!(distances[graph.node(2, 2, 2)], 6);
/// assert_eq!(distances[graph.node(1, 0, 2)], 3);
/// # Ok::<(), GraphError>(())
/// ```
///
/// The visit can also be run one level at a time:
///
/// ```
/// use scanbfs::prelude::*;
///
/// let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let visit = breadth_first::ParScan::new(&graph);
/// let mut state = visit.start(0)?;
/// visit.step(&mut state);
/// assert_eq!(state.frontier(), [1, 2]);
/// visit.step(&mut state);
/// assert_eq!(state.frontier(), [3]);
/// visit.step(&mut state);
/// assert!(state.is_done());
/// assert_eq!(state.into_distances(), [0, 1, 1, 2]);
/// # Ok::<(), GraphError>(())
/// ```
pub struct ParScan<G: RandomAccessGraph> {
    graph: G,
    granularity: usize,
}

impl<G: RandomAccessGraph> ParScan<G> {
    /// Creates a parallel breadth-first visit.
    ///
    /// This constructor uses the [default granularity](Granularity::default). Use
    /// [`with_granularity`](Self::with_granularity) to set a different
    /// granularity.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    #[inline(always)]
    pub fn new(graph: G) -> Self {
        Self::with_granularity(graph, Granularity::default())
    }

    /// Creates a parallel breadth-first visit.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    ///
    /// * `granularity`: the minimum size of the parallel tasks in which the
    ///   frontier is split during expansion. High granularity reduces
    ///   overhead, but may lead to decreased performance on graphs with a
    ///   skewed outdegree distribution. From this parameter, we derive a
    ///   [node granularity](Granularity::node_granularity).
    pub fn with_granularity(graph: G, granularity: Granularity) -> Self {
        let num_nodes = graph.num_nodes();
        let num_arcs = graph.num_arcs_hint();
        Self {
            graph,
            granularity: granularity.node_granularity(num_nodes, num_arcs),
        }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }
}

/// The state of a [`ParScan`] visit between two levels.
///
/// A state is created by [`ParScan::start`] and advanced by
/// [`ParScan::step`]; when the frontier becomes empty the visit is complete,
/// and the distances can be retrieved with
/// [`into_distances`](ParScanState::into_distances).
pub struct ParScanState {
    /// The nodes discovered at the last level.
    frontier: Vec<usize>,
    distances: Vec<usize>,
    claims: ClaimSet,
    /// The distance assigned to the nodes discovered by the next step.
    level: usize,
}

impl ParScanState {
    /// Returns the current frontier, that is, the nodes at distance
    /// [`level`](Self::level) minus one from the source.
    pub fn frontier(&self) -> &[usize] {
        &self.frontier
    }

    /// Returns the distances computed so far.
    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    /// Returns the distance that will be assigned to the nodes discovered by
    /// the next step.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns true if the frontier is empty, that is, the visit is complete.
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Consumes the state, returning the distances.
    pub fn into_distances(self) -> Vec<usize> {
        self.distances
    }
}

impl<G: RandomAccessGraph + Sync> ParScan<G> {
    /// Starts a visit from `source`, returning a state whose frontier
    /// contains just the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidNode`] if `source` is not a node of the
    /// graph.
    pub fn start(&self, source: usize) -> Result<ParScanState, GraphError> {
        let num_nodes = self.graph.num_nodes();
        check_node(source, num_nodes)?;

        let claims = ClaimSet::new(num_nodes);
        claims.claim(source);
        let mut distances = vec![UNREACHABLE; num_nodes];
        distances[source] = 0;

        Ok(ParScanState {
            frontier: vec![source],
            distances,
            claims,
            level: 1,
        })
    }

    /// Expands the frontier of `state` by one level.
    ///
    /// Returns the size of the new frontier. Calling this method on a
    /// completed visit does nothing.
    ///
    /// # Panics
    ///
    /// Panics if a frontier node has more successors than its
    /// [outdegree](RandomAccessGraph::outdegree).
    pub fn step(&self, state: &mut ParScanState) -> usize {
        if state.frontier.is_empty() {
            return 0;
        }

        let frontier = &state.frontier;
        let mut offsets = par_map(frontier, |&node| self.graph.outdegree(node));
        let bound = par_exclusive_scan(&mut offsets);

        let mut next = vec![EMPTY; bound];
        {
            let next = next.as_sync_slice();
            let distances = state.distances.as_sync_slice();
            let claims = &state.claims;
            let level = state.level;
            let offsets = &offsets;

            (0..frontier.len())
                .into_par_iter()
                .with_min_len(self.granularity)
                .for_each(|i| {
                    let node = frontier[i];
                    let start = offsets[i];
                    let end = offsets.get(i + 1).copied().unwrap_or(bound);
                    let mut pos = start;
                    for succ in self.graph.successors(node) {
                        if claims.claim(succ) {
                            assert!(
                                pos < end,
                                "Node {} has more successors than its outdegree {}",
                                node,
                                end - start
                            );
                            // Slots in [start..end) belong to this node only,
                            // and only the winner of the claim writes the
                            // distance of succ.
                            unsafe {
                                next[pos].set(succ);
                                distances[succ].set(level);
                            }
                            pos += 1;
                        }
                    }
                });
        }

        state.frontier = par_filter(&next, |&node| node != EMPTY);
        debug!(
            "Level {}: {} nodes in {} slots",
            state.level,
            state.frontier.len(),
            bound
        );
        state.level += 1;
        state.frontier.len()
    }
}

impl<G: RandomAccessGraph + Sync> Traversal for ParScan<G> {
    fn traverse(&self, source: usize) -> Result<Vec<usize>, GraphError> {
        let mut state = self.start(source)?;
        while !state.is_done() {
            self.step(&mut state);
        }
        Ok(state.into_distances())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;

    #[test]
    fn test_levels() -> Result<(), GraphError> {
        let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let visit = ParScan::with_granularity(&graph, Granularity::Nodes(1));
        assert_eq!(visit.graph().num_nodes(), 5);
        let mut state = visit.start(0)?;
        assert_eq!(state.level(), 1);
        assert_eq!(visit.step(&mut state), 2);
        assert_eq!(visit.step(&mut state), 1);
        assert_eq!(state.frontier(), [3]);
        assert_eq!(state.distances()[3], 2);
        assert_eq!(visit.step(&mut state), 1);
        assert_eq!(visit.step(&mut state), 0);
        assert!(state.is_done());
        assert_eq!(state.level(), 5);
        // No-op once done
        assert_eq!(visit.step(&mut state), 0);
        assert_eq!(state.level(), 5);
        Ok(())
    }

    /// A graph that lies about its outdegrees.
    struct Liar(VecGraph);

    impl RandomAccessGraph for Liar {
        type Successors<'succ> = <VecGraph as RandomAccessGraph>::Successors<'succ>;

        fn num_nodes(&self) -> usize {
            self.0.num_nodes()
        }

        fn successors(&self, node_id: usize) -> Self::Successors<'_> {
            self.0.successors(node_id)
        }

        fn outdegree(&self, _node_id: usize) -> usize {
            1
        }
    }

    #[test]
    #[should_panic(expected = "more successors than its outdegree")]
    fn test_outdegree_too_small() {
        let graph = Liar(VecGraph::from_arcs([(0, 1), (0, 2)]));
        let _ = ParScan::new(graph).traverse(0);
    }
}
