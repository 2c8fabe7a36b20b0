//! Graph algorithms for Socigraph.
//!
//! Every algorithm is a plain function over a [`GraphView`] that returns an
//! owned, serializable record. Records hold no references into the graph, so
//! they stay valid after the graph changes.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS, DFS, BFS layers
//! - [`shortest_path`] - Dijkstra, A*
//! - [`components`] - Connected components
//! - [`centrality`] - Degree and closeness centrality
//! - [`coloring`] - Welsh–Powell coloring
//!
//! ## Usage
//!
//! ```
//! use socigraph_adapters::plugins::algorithms::{bfs, connected_components, dijkstra};
//! use socigraph_common::NodeId;
//! use socigraph_core::{Node, SocialGraph};
//!
//! let mut graph = SocialGraph::new();
//! for n in 1..=3 {
//!     graph.add_node(Node::new(n, format!("n{n}"))).unwrap();
//! }
//! graph.add_edge(NodeId::new(1), NodeId::new(2), 1.0).unwrap();
//! graph.add_edge(NodeId::new(2), NodeId::new(3), 1.0).unwrap();
//!
//! let visited = bfs(&graph, NodeId::new(1)).unwrap();
//! assert_eq!(visited.order.len(), 3);
//!
//! let components = connected_components(&graph);
//! assert_eq!(components.count, 1);
//!
//! let path = dijkstra(&graph, NodeId::new(1), Some(NodeId::new(3))).unwrap();
//! assert_eq!(path.cost, Some(2.0));
//! ```

pub mod centrality;
pub mod coloring;
pub mod components;
pub mod shortest_path;
mod traits;
pub mod traversal;

// Core traits
pub use traits::{DistanceMap, GraphView, MinScored, PredecessorMap};

// Traversal algorithms
pub use traversal::{LayersResult, TraversalResult, bfs, bfs_layers, dfs};

// Shortest path algorithms
pub use shortest_path::{
    Heuristic, ShortestPathResult, astar, dijkstra, dijkstra_path, reconstruct_path,
};

// Component algorithms
pub use components::{ComponentsResult, connected_component_count, connected_components};

// Centrality algorithms
pub use centrality::{CentralityResult, centrality, closeness_centrality, degree_centrality};

// Coloring algorithms
pub use coloring::{ColoringResult, welsh_powell};

// Algorithm wrappers
pub use centrality::{CentralityAlgorithm, DegreeCentralityAlgorithm};
pub use coloring::WelshPowellAlgorithm;
pub use components::ConnectedComponentsAlgorithm;
pub use shortest_path::{AstarAlgorithm, DijkstraAlgorithm};
pub use traversal::{BfsAlgorithm, BfsLayersAlgorithm, DfsAlgorithm};
