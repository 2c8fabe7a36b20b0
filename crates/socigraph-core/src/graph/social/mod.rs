//! Social graph model.
//!
//! Nodes carry three social-signal attributes and a 2-D position. Edges are
//! undirected, weighted, and identified by their [`EdgeKey`]. The
//! [`SocialGraph`] owns all of it and keeps the adjacency index in sync.
//!
//! [`EdgeKey`]: socigraph_common::types::EdgeKey

mod edge;
mod node;
mod store;
mod views;

pub use edge::Edge;
pub use node::{Node, NodeUpdate, Position};
pub use store::{SocialGraph, WeightSource};
pub use views::AdjacencyMatrix;
