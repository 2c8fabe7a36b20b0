//! Plugin system for Socigraph.
//!
//! This module provides the plugin infrastructure: algorithms are registered
//! under a name and executed against any [`GraphView`](algorithms::GraphView)
//! with textual or typed parameters.
//!
//! ## Modules
//!
//! - [`algorithms`] - Graph algorithms (BFS, DFS, shortest path, components, centrality, coloring)

pub mod algorithms;
mod registry;
mod traits;

pub use registry::{BuiltinPlugin, PluginRegistry};
pub use traits::{Algorithm, AlgorithmResult, ParameterDef, ParameterType, Parameters, Plugin};
