pub mod dijkstra;
pub mod result;

pub use result::{ShortestPathResult, TargetOutcome};
