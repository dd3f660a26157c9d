use log::{debug, info};
use rand::Rng;
use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::TargetOutcome;
use crate::bench::report;
use crate::graph::builder::{random_vertex, GraphBuilder};
use crate::graph::{validate_density, ListGraph, MatrixGraph, UndirectedGraph};
use crate::{Error, Result};

/// Upper bound on to-one source/destination resampling per trial. A pair
/// whose destination turns out unreachable is redrawn at most this many
/// times before the trial fails with [`Error::DisconnectedGraph`].
pub const MAX_PAIR_ATTEMPTS: usize = 32;

/// Which storage backs the graphs of a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Adjacency lists ([`ListGraph`])
    List,
    /// Dense adjacency matrix ([`MatrixGraph`])
    Matrix,
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::List => write!(f, "List graph"),
            Representation::Matrix => write!(f, "Matrix graph"),
        }
    }
}

/// One benchmark configuration: graph shape plus trial count
///
/// Validated up front so malformed parameters are rejected before any graph
/// is built or any clock started.
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub vertices: usize,
    pub density: f64,
    pub trials: usize,
}

impl BenchConfig {
    pub fn new(vertices: usize, density: f64, trials: usize) -> Result<Self> {
        if vertices < 2 {
            return Err(Error::TooFewVertices(vertices));
        }
        let density = validate_density(density)?;
        if trials == 0 {
            return Err(Error::NoTrials);
        }
        Ok(BenchConfig {
            vertices,
            density,
            trials,
        })
    }

    /// Small graphs measured once get a per-vertex path dump for manual
    /// verification. This is a debugging aid, outside the timing contract.
    fn diagnostic(&self) -> bool {
        self.vertices <= 10 && self.trials == 1
    }
}

/// Mean query latencies measured for one (representation, V, D) configuration
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub representation: Representation,
    pub vertices: usize,
    pub density: f64,
    pub trials: usize,
    /// Arithmetic mean latency of the source-to-all mode
    pub mean_to_all: Duration,
    /// Arithmetic mean latency of the source-to-one mode
    pub mean_to_one: Duration,
}

/// Repeats build-and-measure cycles and reports mean latency per query mode
///
/// Each trial owns a freshly built graph; construction stays outside the
/// measured interval, which covers exactly one algorithm invocation on a
/// monotonic clock.
#[derive(Debug)]
pub struct BenchmarkRunner {
    builder: GraphBuilder<u32>,
    dijkstra: Dijkstra,
}

impl BenchmarkRunner {
    /// Runner with the standard weight range [1, 20]
    pub fn new() -> Self {
        BenchmarkRunner {
            builder: GraphBuilder::standard(),
            dijkstra: Dijkstra::new(),
        }
    }

    /// Runs all trials of `config` against the chosen representation.
    pub fn run<R>(
        &self,
        representation: Representation,
        config: &BenchConfig,
        rng: &mut R,
    ) -> Result<BenchReport>
    where
        R: Rng + ?Sized,
    {
        match representation {
            Representation::List => {
                self.run_trials(representation, config, rng, ListGraph::<u32>::new)
            }
            Representation::Matrix => {
                self.run_trials(representation, config, rng, MatrixGraph::<u32>::new)
            }
        }
    }

    fn run_trials<G, R, F>(
        &self,
        representation: Representation,
        config: &BenchConfig,
        rng: &mut R,
        make_graph: F,
    ) -> Result<BenchReport>
    where
        G: UndirectedGraph<u32>,
        R: Rng + ?Sized,
        F: Fn(usize, f64) -> Result<G>,
    {
        let mut total_to_all = Duration::ZERO;
        let mut total_to_one = Duration::ZERO;

        for trial in 0..config.trials {
            let mut graph = make_graph(config.vertices, config.density)?;
            self.builder.populate(&mut graph, rng);
            debug!(
                "{} trial {}/{}: built {} vertices, {} edges",
                representation,
                trial + 1,
                config.trials,
                graph.vertex_count(),
                graph.edge_count()
            );

            let source = random_vertex(rng, config.vertices);
            let start = Instant::now();
            let result = self.dijkstra.to_all(&graph, source)?;
            total_to_all += start.elapsed();
            if config.diagnostic() {
                report::print_distance_table(source, &result);
            }

            total_to_one += self.timed_to_one(&graph, config, rng)?;
        }

        let trials = config.trials as u32;
        let bench_report = BenchReport {
            representation,
            vertices: config.vertices,
            density: config.density,
            trials: config.trials,
            mean_to_all: total_to_all / trials,
            mean_to_one: total_to_one / trials,
        };
        info!(
            "{} |V| = {} D = {}: to-all {:?}, to-one {:?}",
            representation,
            config.vertices,
            config.density,
            bench_report.mean_to_all,
            bench_report.mean_to_one
        );
        Ok(bench_report)
    }

    /// Times one to-one query on a random distinct pair. Unreachable pairs
    /// are redrawn up to [`MAX_PAIR_ATTEMPTS`] times; only the successful
    /// query's elapsed time counts.
    fn timed_to_one<G, R>(&self, graph: &G, config: &BenchConfig, rng: &mut R) -> Result<Duration>
    where
        G: UndirectedGraph<u32>,
        R: Rng + ?Sized,
    {
        for attempt in 1..=MAX_PAIR_ATTEMPTS {
            let source = random_vertex(rng, config.vertices);
            let mut destination = random_vertex(rng, config.vertices);
            while destination == source {
                destination = random_vertex(rng, config.vertices);
            }

            let start = Instant::now();
            let outcome = self.dijkstra.to_one(graph, source, destination)?;
            let elapsed = start.elapsed();

            match outcome {
                TargetOutcome::Reached { .. } => {
                    if config.diagnostic() {
                        report::print_target_path(source, destination, &outcome);
                    }
                    return Ok(elapsed);
                }
                TargetOutcome::Unreachable => {
                    debug!(
                        "no path from {} to {}, resampling pair (attempt {})",
                        source, destination, attempt
                    );
                }
            }
        }
        Err(Error::DisconnectedGraph {
            attempts: MAX_PAIR_ATTEMPTS,
        })
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}
