/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Granularity of parallel tasks, specified transparently by nodes or arcs.
///
/// Parallel visits split each frontier into tasks formed by a minimum number
/// of nodes. This enum makes it possible to specify that number directly, or
/// as a tentative number of arcs, which is then converted into a number of
/// nodes using the average outdegree of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Node granularity: each task will be formed by at least the specified
    /// number of nodes.
    Nodes(usize),
    /// Arc granularity: each task will be formed by a number of nodes that
    /// has, tentatively, sum of outdegrees equal to the specified number of
    /// arcs.
    Arcs(u64),
}

impl core::default::Default for Granularity {
    /// Returns a default granularity of 128 nodes.
    fn default() -> Self {
        Self::Nodes(128)
    }
}

impl Granularity {
    /// Returns a node granularity for a given number of nodes and arcs.
    ///
    /// For the variant [`Nodes`](Self::Nodes), the specified number of nodes is
    /// returned. For the variant [`Arcs`](Self::Arcs), the number of nodes is
    /// computed as the specified number of arcs divided by the average
    /// outdegree; if the number of arcs is not available, the average
    /// outdegree is assumed to be one.
    ///
    /// The result is never zero.
    pub fn node_granularity(&self, num_nodes: usize, num_arcs: Option<u64>) -> usize {
        match self {
            Self::Nodes(n) => (*n).max(1),
            Self::Arcs(n) => {
                let average_degree =
                    num_arcs.unwrap_or(num_nodes as u64) as f64 / num_nodes.max(1) as f64;
                if average_degree == 0.0 {
                    return usize::MAX;
                }
                (*n as f64 / average_degree)
                    .min(usize::MAX as f64)
                    .ceil()
                    .max(1.) as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_granularity() {
        assert_eq!(Granularity::Nodes(128).node_granularity(10, None), 128);
        assert_eq!(Granularity::Nodes(0).node_granularity(10, None), 1);
        assert_eq!(Granularity::default().node_granularity(10, None), 128);
        // Average outdegree 4
        assert_eq!(Granularity::Arcs(1000).node_granularity(100, Some(400)), 250);
        // Average outdegree assumed to be 1
        assert_eq!(Granularity::Arcs(1000).node_granularity(100, None), 1000);
        // No arcs at all: a single task
        assert_eq!(Granularity::Arcs(1000).node_granularity(100, Some(0)), usize::MAX);
    }
}
