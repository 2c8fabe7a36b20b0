//! # socigraph-core
//!
//! Core layer for Socigraph: the social graph model, its adjacency index, and
//! the similarity-based edge weighting.
//!
//! This crate provides the data structures every algorithm reads from. It
//! depends only on `socigraph-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Node/Edge records and the [`SocialGraph`] container
//! - [`index`] - Adjacency index kept in sync with the edge map
//! - [`weight`] - Edge weight function and its coefficients
//! - [`statistics`] - Whole-graph summary statistics

#![warn(missing_docs)]

pub mod graph;
pub mod index;
pub mod statistics;
pub mod weight;

// Re-export commonly used types
pub use graph::social::{
    AdjacencyMatrix, Edge, Node, NodeUpdate, Position, SocialGraph, WeightSource,
};
pub use index::adjacency::AdjacencyIndex;
pub use statistics::GraphStatistics;
pub use weight::{WeightConfig, WeightFunction};
