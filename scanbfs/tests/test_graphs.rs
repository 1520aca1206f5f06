/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use common::{scenario_graph, test_graph};
use scanbfs::prelude::*;

/// A graph whose successors and outdegrees are given separately, so that
/// they can disagree.
struct Broken {
    succ: Vec<Vec<usize>>,
    outdegrees: Vec<usize>,
}

impl RandomAccessGraph for Broken {
    type Successors<'succ> = core::iter::Copied<core::slice::Iter<'succ, usize>>;

    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    fn successors(&self, node_id: usize) -> Self::Successors<'_> {
        self.succ[node_id].iter().copied()
    }

    fn outdegree(&self, node_id: usize) -> usize {
        self.outdegrees[node_id]
    }
}

#[test]
fn test_check_valid() -> Result<()> {
    check_impl(test_graph())?;
    check_impl(scenario_graph())?;
    check_impl(VecGraph::empty(3))?;
    check_impl(ErdosRenyi::new(100, 0.1, 42).build())?;
    for side in 0..6 {
        check_impl(LatticeGraph::new(side)?)?;
    }
    Ok(())
}

#[test]
fn test_check_outdegree_mismatch() {
    let graph = Broken {
        succ: vec![vec![1], vec![0, 0], vec![]],
        outdegrees: vec![1, 1, 0],
    };
    assert_eq!(
        check_impl(&graph),
        Err(GraphError::OutdegreeMismatch {
            node: 1,
            outdegree: 1,
            successors: 2
        })
    );
}

#[test]
fn test_check_invalid_successor() {
    let graph = Broken {
        succ: vec![vec![1], vec![3]],
        outdegrees: vec![1, 1],
    };
    assert_eq!(
        check_impl(&graph),
        Err(GraphError::InvalidSuccessor {
            node: 1,
            succ: 3,
            num_nodes: 2
        })
    );
}

#[test]
fn test_lattice_vs_lists() -> Result<()> {
    // The same 2 × 2 × 2 lattice, as an explicit graph
    let lattice = LatticeGraph::new(2)?;
    let lists = (0..lattice.num_nodes())
        .map(|node| lattice.successors(node).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(lists[0], [1, 2, 4]);
    assert_eq!(lists[7], Vec::<usize>::new());
    let explicit = VecGraph::from_lists(lists)?;
    assert_eq!(explicit.num_arcs(), 12);
    assert_eq!(lattice.num_arcs_hint(), Some(12));

    for source in 0..lattice.num_nodes() {
        assert_eq!(
            breadth_first::Seq::new(&lattice).traverse(source)?,
            breadth_first::ParScan::new(&explicit).traverse(source)?
        );
    }
    Ok(())
}

#[test]
fn test_error_messages() {
    let err = GraphError::InvalidNode {
        node: 10,
        num_nodes: 6,
    };
    assert_eq!(
        err.to_string(),
        "Node 10 does not exist (the graph has 6 nodes)"
    );
    assert!(LatticeGraph::new(usize::MAX)
        .unwrap_err()
        .to_string()
        .contains("too many nodes"));
}

#[test]
#[should_panic]
fn test_visit_invalid_successor() {
    let graph = Broken {
        succ: vec![vec![1], vec![200], vec![]],
        outdegrees: vec![1, 1, 0],
    };
    assert!(check_impl(&graph).is_err());
    let _ = breadth_first::Seq::new(&graph).traverse(0);
}
