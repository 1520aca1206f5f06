/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use scanbfs::prelude::*;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;
use std::time::SystemTime;

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use for parallel visits.
    pub num_threads: usize,
}

/// Shared CLI arguments for commands that specify a granularity.
#[derive(Args, Debug)]
pub struct GranularityArgs {
    #[arg(long, conflicts_with("node_granularity"))]
    /// The tentative number of arcs used to define the size of a parallel job
    /// (advanced option).
    pub arc_granularity: Option<u64>,

    #[arg(long, conflicts_with("arc_granularity"))]
    /// The tentative number of nodes used to define the size of a parallel job
    /// (advanced option).
    pub node_granularity: Option<usize>,
}

impl GranularityArgs {
    pub fn into_granularity(&self) -> Granularity {
        match (self.arc_granularity, self.node_granularity) {
            (Some(_), Some(_)) => unreachable!(),
            (Some(arc_granularity), None) => Granularity::Arcs(arc_granularity),
            (None, Some(node_granularity)) => Granularity::Nodes(node_granularity),
            (None, None) => Granularity::default(),
        }
    }
}

/// Parses a probability, that is, a float in `[0..1]`.
pub fn probability_parser(arg: &str) -> Result<f64> {
    let p = arg.parse::<f64>()?;
    ensure!((0.0..=1.0).contains(&p), "Probability must be in [0..1]");
    Ok(p)
}

/// The graph on which visits are run.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GraphArgs {
    /// An implicit three-dimensional lattice with side³ nodes, in which each
    /// node points to the nodes obtained by increasing one coordinate.
    Lattice {
        /// The side of the lattice.
        #[arg(long, default_value_t = 500)]
        side: usize,
    },
    /// A random Erdős–Rényi graph (generation takes time quadratic in the
    /// number of nodes).
    Er {
        /// The number of nodes.
        #[arg(long)]
        nodes: usize,
        /// The probability of an arc between two distinct nodes.
        #[arg(long, value_parser = probability_parser)]
        p: f64,
        /// The seed of the pseudorandom number generator.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// A built-in graph with six nodes.
    Scenario,
}

impl Display for GraphArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphArgs::Lattice { side } => write!(f, "lattice of side {}", side),
            GraphArgs::Er { nodes, p, seed } => write!(
                f,
                "Erdős–Rényi graph with {} nodes, p = {}, seed = {}",
                nodes, p, seed
            ),
            GraphArgs::Scenario => write!(f, "scenario graph"),
        }
    }
}

/// A graph built from [`GraphArgs`].
#[derive(Debug, Clone)]
pub enum Graph {
    Lattice(LatticeGraph),
    Explicit(VecGraph),
}

impl GraphArgs {
    /// Builds the graph described by the arguments.
    pub fn build(&self) -> Result<Graph> {
        log::info!("Building {}...", self);
        let start = std::time::Instant::now();
        let graph = match self {
            GraphArgs::Lattice { side } => Graph::Lattice(
                LatticeGraph::new(*side).with_context(|| format!("Cannot build {}", self))?,
            ),
            GraphArgs::Er { nodes, p, seed } => {
                Graph::Explicit(ErdosRenyi::new(*nodes, *p, *seed).build())
            }
            GraphArgs::Scenario => Graph::Explicit(scenario_graph()),
        };
        let num_arcs = match &graph {
            Graph::Lattice(g) => g.num_arcs_hint(),
            Graph::Explicit(g) => g.num_arcs_hint(),
        };
        log::info!(
            "Built a graph with {} nodes and {} arcs in {}",
            match &graph {
                Graph::Lattice(g) => g.num_nodes(),
                Graph::Explicit(g) => g.num_nodes(),
            },
            num_arcs.map_or("an unknown number of".to_owned(), |n| n.to_string()),
            pretty_print_elapsed(start.elapsed().as_secs_f64())
        );
        Ok(graph)
    }
}

/// The successor lists of the built-in scenario graph.
///
/// Node 4 points back to the source 0, and node 5 is a sink.
pub const SCENARIO_LISTS: [&[usize]; 6] = [&[1, 2], &[2, 3], &[3], &[4], &[0, 1, 5], &[]];

/// The distances from node 0 in the built-in scenario graph.
pub const SCENARIO_DISTANCES: [usize; 6] = [0, 1, 1, 2, 3, 4];

/// Returns the built-in scenario graph.
pub fn scenario_graph() -> VecGraph {
    let mut graph = VecGraph::empty(SCENARIO_LISTS.len());
    for (node, succ) in SCENARIO_LISTS.iter().enumerate() {
        graph.add_arcs(succ.iter().map(|&succ| (node, succ)));
    }
    graph
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .with_context(|| format!("Failed to create a thread pool with {} threads", num_threads))?;
    log::info!("Using {} threads", thread_pool.current_num_threads());
    Ok(thread_pool)
}

fn fmt_distance(distance: usize) -> String {
    if distance == UNREACHABLE {
        "unreachable".to_owned()
    } else {
        distance.to_string()
    }
}

/// Compares element-wise the distances computed by a sequential and a
/// parallel visit, failing on the first node on which they differ.
pub fn compare_distances(seq: &[usize], par: &[usize]) -> Result<()> {
    ensure!(
        seq.len() == par.len(),
        "Different number of distances: {} (sequential) != {} (parallel)",
        seq.len(),
        par.len()
    );
    if let Some(node) = (0..seq.len()).find(|&node| seq[node] != par[node]) {
        bail!(
            "Different distance for node {}: {} (sequential) != {} (parallel)",
            node,
            fmt_distance(seq[node]),
            fmt_distance(par[node])
        );
    }
    Ok(())
}

/// Parses a duration from a string.
/// For compatibility with Java, if no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
    use jiff::SpanRound;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Bench(bench::CliArgs),
    Check(check::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "scanbfs", version)]
/// Tools to benchmark and check sequential and parallel breadth-first visits.
///
/// Logging is configured by the RUST_LOG environment variable
/// <https://docs.rs/env_logger/latest/env_logger/>; the default is `info`.
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

pub mod bench;
pub mod check;

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Bench(args) => {
            bench::main(cli.args, args)?;
        }
        SubCommands::Check(args) => {
            check::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let weeks = elapsed_seconds / (60 * 60 * 24 * 7);
    elapsed_seconds %= 60 * 60 * 24 * 7;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match weeks {
        0 => {}
        1 => result.push_str("1 week "),
        _ => result.push_str(&format!("{} weeks ", weeks)),
    }
    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_duration() -> Result<()> {
        assert_eq!(parse_duration("567")?, Duration::from_millis(567));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(
            parse_duration("1d2h3m4s567")?,
            Duration::from_millis(93_784_567)
        );
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3w").is_err());
        Ok(())
    }

    #[test]
    fn test_parsers() {
        assert_eq!(num_threads_parser("4").ok(), Some(4));
        assert!(num_threads_parser("0").is_err());
        assert!(num_threads_parser("-1").is_err());
        assert_eq!(probability_parser("0.25").ok(), Some(0.25));
        assert!(probability_parser("1.5").is_err());
        assert!(probability_parser("p").is_err());
    }

    #[test]
    fn test_graph_args() -> Result<()> {
        let cli = Cli::try_parse_from(["scanbfs", "bench", "lattice"])?;
        let SubCommands::Bench(args) = cli.command else {
            bail!("Expected the bench subcommand");
        };
        assert_eq!(args.graph, GraphArgs::Lattice { side: 500 });
        assert_eq!(args.repeats, 5);
        assert_eq!(args.source, 0);
        assert_eq!(args.granularity.into_granularity(), Granularity::default());

        let cli = Cli::try_parse_from([
            "scanbfs",
            "check",
            "-j",
            "3",
            "--arc-granularity",
            "1000",
            "er",
            "--nodes",
            "100",
            "--p",
            "0.1",
        ])?;
        let SubCommands::Check(args) = cli.command else {
            bail!("Expected the check subcommand");
        };
        assert_eq!(
            args.graph,
            GraphArgs::Er {
                nodes: 100,
                p: 0.1,
                seed: 0
            }
        );
        assert_eq!(args.num_threads.num_threads, 3);
        assert_eq!(args.granularity.into_granularity(), Granularity::Arcs(1000));
        assert_eq!(args.sources, 10);

        assert!(Cli::try_parse_from([
            "scanbfs",
            "check",
            "--arc-granularity",
            "1000",
            "--node-granularity",
            "10",
            "scenario"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["scanbfs", "bench", "-j", "0", "scenario"]).is_err());
        Ok(())
    }

    #[test]
    fn test_scenario_graph() -> Result<()> {
        let graph = scenario_graph();
        check_impl(&graph)?;
        assert_eq!(graph.num_arcs(), 9);
        assert_eq!(seq_distances(&graph, 0)?, SCENARIO_DISTANCES);
        Ok(())
    }

    #[test]
    fn test_compare_distances() {
        assert!(compare_distances(&[0, 1, UNREACHABLE], &[0, 1, UNREACHABLE]).is_ok());
        let err = compare_distances(&[0, 1, UNREACHABLE], &[0, 1, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Different distance for node 2: unreachable (sequential) != 2 (parallel)"
        );
        assert!(compare_distances(&[0], &[0, 1]).is_err());
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(3661.0),
            "1 hour 1 minute 1.000 seconds (3661s)"
        );
    }
}
