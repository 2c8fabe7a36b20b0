//! Index structures.
//!
//! - [`adjacency`] - Symmetric neighbor sets, the backbone of every traversal

pub mod adjacency;

pub use adjacency::AdjacencyIndex;
