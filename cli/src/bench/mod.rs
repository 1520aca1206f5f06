/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{compare_distances, get_thread_pool, Graph, GraphArgs};
use crate::{GlobalArgs, GranularityArgs, NumThreadsArg};
use anyhow::{ensure, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use log::info;
use scanbfs::prelude::*;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bench", about = "Benchmarks the sequential and the parallel breadth-first visits, checking that they compute the same distances.", long_about = None)]
pub struct CliArgs {
    /// Number of timed runs of each visit.
    #[arg(short = 'R', long, default_value_t = 5)]
    pub repeats: usize,

    /// The source of the visits.
    #[arg(short, long, default_value_t = 0)]
    pub source: usize,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[clap(flatten)]
    pub granularity: GranularityArgs,

    #[command(subcommand)]
    pub graph: GraphArgs,
}

/// Average timings of a benchmark.
#[derive(Debug, Clone, Copy)]
pub struct BenchResults {
    pub seq: Duration,
    pub par: Duration,
}

impl BenchResults {
    /// Returns the ratio between the sequential and the parallel time.
    pub fn speedup(&self) -> f64 {
        self.seq.as_secs_f64() / self.par.as_secs_f64()
    }
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(args.repeats > 0, "The number of repeats must be positive");

    let results = match args.graph.build()? {
        Graph::Lattice(graph) => bench(&global_args, &args, graph)?,
        Graph::Explicit(graph) => bench(&global_args, &args, graph)?,
    };

    println!("Average parallel time: {:.3}ms", ms(results.par));
    println!("Average sequential time: {:.3}ms", ms(results.seq));
    println!("Speedup: {:.3}", results.speedup());
    Ok(())
}

fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Times `args.repeats` runs of both visits from `args.source`, returning
/// the average timings.
pub fn bench<G: RandomAccessGraph + Sync>(
    global_args: &GlobalArgs,
    args: &CliArgs,
    graph: G,
) -> Result<BenchResults> {
    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;
    info!("Benchmarking {} runs from node {}", args.repeats, args.source);
    let seq = breadth_first::Seq::new(&graph);
    let par = breadth_first::ParScan::with_granularity(&graph, args.granularity.into_granularity());

    let mut pl = ProgressLogger::default();
    pl.item_name("run").expected_updates(Some(args.repeats));
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }
    pl.start("Benchmarking visits...");

    let mut seq_total = Duration::ZERO;
    let mut par_total = Duration::ZERO;

    for run in 1..=args.repeats {
        let start = Instant::now();
        let par_distances = thread_pool.install(|| par.traverse(args.source))?;
        let par_elapsed = start.elapsed();
        info!("Run #{}: parallel visit took {:.3}ms", run, ms(par_elapsed));
        par_total += par_elapsed;

        let start = Instant::now();
        let seq_distances = seq.traverse(args.source)?;
        let seq_elapsed = start.elapsed();
        info!("Run #{}: sequential visit took {:.3}ms", run, ms(seq_elapsed));
        seq_total += seq_elapsed;

        compare_distances(&seq_distances, &par_distances)?;
        pl.update();
    }

    pl.done();

    Ok(BenchResults {
        seq: seq_total.div_f64(args.repeats as f64),
        par: par_total.div_f64(args.repeats as f64),
    })
}
