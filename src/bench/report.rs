//! Console reporting: per-configuration mean latencies and the small-graph
//! path dump used to eyeball correctness.

use num_traits::{PrimInt, Unsigned};
use std::fmt::{self, Debug, Display};

use crate::algorithm::{ShortestPathResult, TargetOutcome};
use crate::bench::runner::BenchReport;

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Prints distance and path from the source to every other vertex.
pub fn print_distance_table<W>(source: usize, result: &ShortestPathResult<W>)
where
    W: PrimInt + Unsigned + Debug + Display,
{
    println!(
        "\nPaths and distances from source vertex {} to all other vertices:",
        source
    );
    for vertex in 0..result.distances.len() {
        if vertex == source {
            continue;
        }
        match (result.distance_to(vertex), result.path_to(vertex)) {
            (Some(distance), Some(path)) => println!(
                "Vertex {}: distance = {}, path: {}",
                vertex,
                distance,
                format_path(&path)
            ),
            _ => println!("Vertex {}: unreachable", vertex),
        }
    }
}

/// Prints the outcome of a single to-one query.
pub fn print_target_path<W>(source: usize, destination: usize, outcome: &TargetOutcome<W>)
where
    W: PrimInt + Unsigned + Debug + Display,
{
    match outcome {
        TargetOutcome::Reached { distance, path } => println!(
            "\nPath from vertex {} to vertex {}: distance = {}, path: {}",
            source,
            destination,
            distance,
            format_path(path)
        ),
        TargetOutcome::Unreachable => println!(
            "\nNo path exists from vertex {} to vertex {}",
            source, destination
        ),
    }
}

fn micros(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1e6
}

impl Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n\t{}\t|V| = {}\tD = {}\t({} trials)",
            self.representation, self.vertices, self.density, self.trials
        )?;
        writeln!(
            f,
            "Calculating the shortest path from source to all vertices took: {:.2} us",
            micros(self.mean_to_all)
        )?;
        write!(
            f,
            "Calculating the shortest path from source to one vertex took: {:.2} us",
            micros(self.mean_to_one)
        )
    }
}

/// Prints the end-of-run summary table across all configurations.
pub fn print_summary(reports: &[BenchReport]) {
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<14} | {:<8} | {:<7} | {:<14} | {:<14}",
        "Representation", "Vertices", "Density", "To-all (us)", "To-one (us)"
    );
    println!("-----------------------------------------------------");
    for report in reports {
        println!(
            "{:<14} | {:<8} | {:<7} | {:<14.2} | {:<14.2}",
            report.representation.to_string(),
            report.vertices,
            report.density,
            micros(report.mean_to_all),
            micros(report.mean_to_one)
        );
    }
}
