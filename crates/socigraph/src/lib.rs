//! # Socigraph
//!
//! An in-memory social graph whose edge weights follow node similarity, with
//! a suite of classical graph algorithms on top.
//!
//! Start with [`SocialGraphDB`] if several threads share one graph, or with
//! [`SocialGraph`] plus the functions in [`algorithms`] if you own the graph
//! outright.
//!
//! ## Quick Start
//!
//! ```rust
//! use socigraph::{Node, NodeId, SocialGraphDB};
//!
//! let db = SocialGraphDB::new();
//! db.add_node(Node::new(1, "A").with_activity(0.8))?;
//! db.add_node(Node::new(2, "B").with_activity(0.4))?;
//! db.add_node(Node::new(3, "C").with_activity(0.6))?;
//! db.add_edge(NodeId::new(1), NodeId::new(2))?;
//! db.add_edge(NodeId::new(2), NodeId::new(3))?;
//!
//! let path = db.dijkstra(NodeId::new(1), Some(NodeId::new(3)))?;
//! assert_eq!(path.path.len(), 3);
//!
//! let coloring = db.welsh_powell();
//! assert_eq!(coloring.color_count, 2);
//! # Ok::<(), socigraph::Error>(())
//! ```

// Re-export the main database API
pub use socigraph_engine::{Config, SocialGraphDB};

// Re-export the graph model
pub use socigraph_core::{
    Edge, GraphStatistics, Node, NodeUpdate, Position, SocialGraph, WeightConfig, WeightFunction,
};

// Re-export core types - ids and the error taxonomy
pub use socigraph_common::{EdgeKey, Entity, Error, NodeId, Result};

// Algorithms and the plugin registry
pub use socigraph_adapters::plugins::algorithms;
pub use socigraph_adapters::plugins::{
    Algorithm, AlgorithmResult, Parameters, Plugin, PluginRegistry,
};
