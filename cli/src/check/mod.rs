/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{compare_distances, get_thread_pool, Graph, GraphArgs, SCENARIO_DISTANCES};
use crate::{GlobalArgs, GranularityArgs, NumThreadsArg};
use anyhow::{ensure, Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use log::{info, warn};
use scanbfs::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "check", about = "Checks that a graph is well formed and that the sequential and the parallel breadth-first visits compute the same distances from several sources.", long_about = None)]
pub struct CliArgs {
    /// The number of sources, evenly spread across the nodes.
    #[arg(short = 'k', long, default_value_t = 10)]
    pub sources: usize,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[clap(flatten)]
    pub granularity: GranularityArgs,

    #[command(subcommand)]
    pub graph: GraphArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(args.sources > 0, "The number of sources must be positive");

    let checked = match args.graph.build()? {
        Graph::Lattice(graph) => check(&global_args, &args, graph)?,
        Graph::Explicit(graph) => {
            if args.graph == GraphArgs::Scenario {
                let distances = seq_distances(&graph, 0)?;
                ensure!(
                    distances == SCENARIO_DISTANCES,
                    "Unexpected distances from node 0: {:?} != {:?}",
                    distances,
                    SCENARIO_DISTANCES
                );
            }
            check(&global_args, &args, graph)?
        }
    };

    println!("The two visits agree on {} sources", checked);
    Ok(())
}

/// Returns `k` sources evenly spread across `[0..num_nodes)`, or fewer if
/// the graph has fewer than `k` nodes.
pub fn spread_sources(num_nodes: usize, k: usize) -> Vec<usize> {
    let k = k.min(num_nodes);
    if k == 0 {
        return vec![];
    }
    let step = num_nodes / k;
    (0..k).map(|i| i * step).collect()
}

/// Checks the graph and compares the two visits from sources spread across
/// the graph, returning the number of sources checked.
pub fn check<G: RandomAccessGraph + Sync>(
    global_args: &GlobalArgs,
    args: &CliArgs,
    graph: G,
) -> Result<usize> {
    check_impl(&graph).context("The graph is not well formed")?;

    let sources = spread_sources(graph.num_nodes(), args.sources);
    if sources.is_empty() {
        warn!("The graph has no nodes");
        return Ok(0);
    }

    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;
    let seq = breadth_first::Seq::new(&graph);
    let par = breadth_first::ParScan::with_granularity(&graph, args.granularity.into_granularity());

    let mut pl = ProgressLogger::default();
    pl.item_name("source").expected_updates(Some(sources.len()));
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }
    pl.start("Comparing visits...");

    for &source in &sources {
        let seq_distances = seq.traverse(source)?;
        let par_distances = thread_pool.install(|| par.traverse(source))?;
        compare_distances(&seq_distances, &par_distances)
            .with_context(|| format!("The visits from node {} differ", source))?;

        let reached = seq_distances.iter().filter(|&&d| d != UNREACHABLE);
        let (count, eccentricity) = reached.fold((0, 0), |(count, max), &d| (count + 1, max.max(d)));
        info!(
            "Source {}: {} reachable nodes, eccentricity {}",
            source, count, eccentricity
        );
        pl.update();
    }

    pl.done();
    Ok(sources.len())
}
