pub mod report;
pub mod runner;

pub use runner::{BenchConfig, BenchReport, BenchmarkRunner, Representation};
