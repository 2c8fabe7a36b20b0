//! Whole-graph summary statistics.
//!
//! Counts, degree distribution, density, and edge-weight range, collected in
//! one pass over the graph.

mod collector;

pub use collector::{DegreeSummary, GraphStatistics, WeightSummary};
