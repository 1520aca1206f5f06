/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// Generation takes time quadratic in `n`; the result is materialized as a
/// [`VecGraph`], so it can be visited many times at no additional cost.
///
/// # Examples
///
/// ```
/// use scanbfs::prelude::*;
///
/// let graph = ErdosRenyi::new(100, 0.05, 0).build();
/// assert_eq!(graph.num_nodes(), 100);
/// assert!((0..100).all(|x| !graph.has_arc(x, x)));
/// // Same seed, same graph
/// assert_eq!(graph, ErdosRenyi::new(100, 0.05, 0).build());
/// ```
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an arc between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in `[0..1]`.
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the graph.
    pub fn build(&self) -> VecGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = VecGraph::empty(self.n);
        for x in 0..self.n {
            for y in 0..self.n {
                if y != x && rng.random_bool(self.p) {
                    graph.add_arc(x, y);
                }
            }
        }
        log::debug!(
            "Generated an Erdös-Rényi graph with {} nodes and {} arcs",
            self.n,
            graph.num_arcs()
        );
        graph
    }
}
