//! SocialGraphDB main database struct.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use socigraph_adapters::plugins::algorithms::{
    CentralityResult, ColoringResult, ComponentsResult, Heuristic, LayersResult,
    ShortestPathResult, TraversalResult, astar, bfs, bfs_layers, centrality, connected_components,
    dfs, dijkstra, welsh_powell,
};
use socigraph_adapters::plugins::{AlgorithmResult, BuiltinPlugin, Parameters, PluginRegistry};
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::Result;
use socigraph_core::{
    AdjacencyMatrix, Edge, GraphStatistics, Node, NodeUpdate, SocialGraph, WeightConfig,
};

use crate::config::Config;

/// Graph and coefficients live under one lock so a coefficient change and
/// the recomputation it triggers are a single write.
#[derive(Debug)]
struct State {
    graph: SocialGraph,
    weights: WeightConfig,
}

/// The main Socigraph database.
///
/// Owns one [`SocialGraph`] behind a single-writer, multi-reader lock.
/// Mutations take the write lock for their whole duration; algorithms run
/// under a read lock, so they always see a consistent graph and may run
/// concurrently with each other.
#[derive(Debug)]
pub struct SocialGraphDB {
    /// Database configuration.
    config: Config,
    /// Graph plus the coefficients its computed weights follow.
    state: RwLock<State>,
    /// Algorithms available by name.
    registry: PluginRegistry,
}

impl SocialGraphDB {
    /// Creates an empty database with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use socigraph_core::Node;
    /// use socigraph_engine::SocialGraphDB;
    ///
    /// let db = SocialGraphDB::new();
    /// db.add_node(Node::new(1, "A")).unwrap();
    /// assert_eq!(db.node_count(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates an empty database with the given configuration.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configuration does not validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use socigraph_engine::{Config, SocialGraphDB};
    ///
    /// let config = Config::default().with_auto_recompute(false);
    /// let db = SocialGraphDB::with_config(config).unwrap();
    /// assert!(!db.config().auto_recompute);
    /// ```
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Wraps an existing graph. Its edge weights are kept as they are.
    pub fn from_graph(graph: SocialGraph, config: Config) -> Result<Self> {
        let db = Self::with_config(config)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        db.state.write().graph = graph;
        Ok(db)
    }

    fn build(config: Config) -> Self {
        let registry = PluginRegistry::with_builtins(BuiltinPlugin::with_heuristic(config.heuristic));
        let state = State {
            graph: SocialGraph::new(),
            weights: config.weights,
        };
        Self {
            config,
            state: RwLock::new(state),
            registry,
        }
    }

    /// Returns the configuration the database was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the algorithm registry.
    #[must_use]
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.state.read().graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state.read().graph.edge_count()
    }

    // === Weight Configuration ===

    /// Returns the current weight coefficients.
    #[must_use]
    pub fn weights(&self) -> WeightConfig {
        self.state.read().weights
    }

    /// Replaces the weight coefficients and recomputes every edge weight.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if a coefficient is negative or not finite. The
    /// previous coefficients and weights are kept.
    pub fn set_weights(&self, weights: WeightConfig) -> Result<()> {
        weights.validate().inspect_err(|e| {
            tracing::warn!("Rejected weight coefficients {}: {}", weights, e);
        })?;
        let mut state = self.state.write();
        state.graph.recompute_all_weights(&weights)?;
        state.weights = weights;
        tracing::info!(%weights, edges = state.graph.edge_count(), "weight coefficients updated");
        Ok(())
    }

    /// Recomputes every edge weight from the current coefficients.
    pub fn recompute_weights(&self) -> Result<()> {
        let mut state = self.state.write();
        let weights = state.weights;
        state.graph.recompute_all_weights(&weights)?;
        tracing::info!(edges = state.graph.edge_count(), "recomputed edge weights");
        Ok(())
    }

    // === Node Operations ===

    /// Adds a node.
    pub fn add_node(&self, node: Node) -> Result<()> {
        let id = node.id;
        self.state
            .write()
            .graph
            .add_node(node)
            .inspect(|_| tracing::debug!(%id, "added node"))
            .inspect_err(|e| tracing::warn!("Failed to add node {}: {}", id, e))
    }

    /// Updates a node and returns the new record.
    ///
    /// With `auto_recompute` on, an update that touches activity, interaction,
    /// or connection count also recomputes every edge weight under the same
    /// write lock.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id and `InvalidParameter` for a non-finite
    /// attribute. Neither the record nor any weight changes in that case.
    pub fn update_node(&self, id: NodeId, update: &NodeUpdate) -> Result<Node> {
        let mut state = self.state.write();
        let node = state
            .graph
            .update_node(id, update)
            .inspect_err(|e| tracing::warn!("Failed to update node {}: {}", id, e))?
            .clone();
        tracing::debug!(%id, "updated node");

        if self.config.auto_recompute && update.affects_weights() {
            let weights = state.weights;
            state.graph.recompute_all_weights(&weights)?;
            tracing::debug!(%id, edges = state.graph.edge_count(), "recomputed weights after update");
        }
        Ok(node)
    }

    /// Removes a node and its edges. Removing an absent node is a no-op.
    pub fn remove_node(&self, id: NodeId) -> Option<Node> {
        let removed = self.state.write().graph.remove_node(id);
        if removed.is_some() {
            tracing::debug!(%id, "removed node");
        }
        removed
    }

    /// Gets a copy of a node.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<Node> {
        self.state.read().graph.node(id).cloned()
    }

    /// Copies of every node, ascending by id.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        self.state.read().graph.nodes().cloned().collect()
    }

    /// Sets every node's connection count to its degree.
    pub fn sync_connection_counts(&self) -> usize {
        let changed = self.state.write().graph.sync_connection_counts();
        tracing::debug!(changed, "synchronized connection counts");
        changed
    }

    // === Edge Operations ===

    /// Adds an edge weighted by the current coefficients.
    pub fn add_edge(&self, u: NodeId, v: NodeId) -> Result<Edge> {
        let mut state = self.state.write();
        let weights = state.weights;
        state
            .graph
            .add_edge(u, v, &weights)
            .inspect(|e| tracing::debug!(edge = %e.key(), weight = e.weight(), "added edge"))
            .inspect_err(|e| tracing::warn!("Failed to add edge {}-{}: {}", u, v, e))
    }

    /// Adds an edge with a fixed weight.
    pub fn add_edge_with_weight(&self, u: NodeId, v: NodeId, weight: f64) -> Result<Edge> {
        self.state
            .write()
            .graph
            .add_edge(u, v, weight)
            .inspect(|e| tracing::debug!(edge = %e.key(), weight = e.weight(), "added edge"))
            .inspect_err(|e| tracing::warn!("Failed to add edge {}-{}: {}", u, v, e))
    }

    /// Removes an edge. Removing an absent edge is a no-op.
    pub fn remove_edge(&self, u: NodeId, v: NodeId) -> Option<Edge> {
        let removed = self.state.write().graph.remove_edge(u, v);
        if let Some(edge) = &removed {
            tracing::debug!(edge = %edge.key(), "removed edge");
        }
        removed
    }

    /// Weight of the edge between `u` and `v`.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Result<f64> {
        self.state.read().graph.edge_weight(u, v)
    }

    /// Copies of every edge, ascending by key.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.state.read().graph.edges().copied().collect()
    }

    /// Neighbors of a node, ascending.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.state.read().graph.neighbors(id).collect()
    }

    /// Removes every node and edge.
    pub fn clear(&self) {
        self.state.write().graph.clear();
        tracing::debug!("cleared graph");
    }

    // === Views ===

    /// An owned copy of the graph.
    #[must_use]
    pub fn snapshot(&self) -> SocialGraph {
        self.state.read().graph.clone()
    }

    /// Runs `f` against the graph under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SocialGraph) -> R) -> R {
        f(&self.state.read().graph)
    }

    /// Summary statistics.
    #[must_use]
    pub fn statistics(&self) -> GraphStatistics {
        self.state.read().graph.statistics()
    }

    /// Ascending adjacency list.
    #[must_use]
    pub fn adjacency_list(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        self.state.read().graph.adjacency_list()
    }

    /// Symmetric adjacency matrix.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        self.state.read().graph.adjacency_matrix()
    }

    // === Algorithms ===

    /// Breadth-first traversal.
    pub fn bfs(&self, start: NodeId) -> Result<TraversalResult> {
        bfs(&self.state.read().graph, start)
    }

    /// Depth-first traversal.
    pub fn dfs(&self, start: NodeId) -> Result<TraversalResult> {
        dfs(&self.state.read().graph, start)
    }

    /// BFS hop layers.
    pub fn bfs_layers(&self, start: NodeId) -> Result<LayersResult> {
        bfs_layers(&self.state.read().graph, start)
    }

    /// Dijkstra shortest paths.
    pub fn dijkstra(&self, source: NodeId, target: Option<NodeId>) -> Result<ShortestPathResult> {
        dijkstra(&self.state.read().graph, source, target)
    }

    /// A* with the given heuristic, or the configured default.
    pub fn astar(
        &self,
        source: NodeId,
        target: NodeId,
        heuristic: Option<Heuristic>,
    ) -> Result<ShortestPathResult> {
        let heuristic = heuristic.unwrap_or(self.config.heuristic);
        astar(&self.state.read().graph, source, target, heuristic)
    }

    /// Connected components.
    #[must_use]
    pub fn connected_components(&self) -> ComponentsResult {
        connected_components(&self.state.read().graph)
    }

    /// Degree and closeness centrality.
    pub fn centrality(&self) -> Result<CentralityResult> {
        centrality(&self.state.read().graph)
    }

    /// Welsh–Powell coloring.
    #[must_use]
    pub fn welsh_powell(&self) -> ColoringResult {
        welsh_powell(&self.state.read().graph)
    }

    /// Runs a registered algorithm by name.
    pub fn run(&self, name: &str, params: &Parameters) -> Result<AlgorithmResult> {
        let state = self.state.read();
        self.registry.execute(name, &state.graph, params)
    }
}

impl Default for SocialGraphDB {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socigraph_common::utils::error::Error;
    use std::sync::Arc;
    use std::thread;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    /// The three-node chain 1-2-3 with attributes from the demo data.
    fn chain(config: Config) -> SocialGraphDB {
        let db = SocialGraphDB::with_config(config).unwrap();
        db.add_node(Node::new(1, "A").with_activity(0.8).with_interaction(12.0).with_connection_count(3))
            .unwrap();
        db.add_node(Node::new(2, "B").with_activity(0.4).with_interaction(5.0).with_connection_count(2))
            .unwrap();
        db.add_node(Node::new(3, "C").with_activity(0.6).with_interaction(9.0).with_connection_count(4))
            .unwrap();
        db.add_edge(id(1), id(2)).unwrap();
        db.add_edge(id(2), id(3)).unwrap();
        db
    }

    #[test]
    fn test_create_database() {
        let db = SocialGraphDB::new();
        assert_eq!(db.node_count(), 0);
        assert_eq!(db.edge_count(), 0);
        assert_eq!(db.weights(), WeightConfig::default());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config::default().with_weights(WeightConfig::default().with_connections(f64::NAN));
        assert!(SocialGraphDB::with_config(config).is_err());
    }

    #[test]
    fn test_crud_errors_pass_through() {
        let db = chain(Config::default());
        assert_eq!(db.add_node(Node::new(1, "dup")), Err(Error::DuplicateId(id(1))));
        assert_eq!(db.add_edge(id(3), id(3)).unwrap_err(), Error::SelfLoop(id(3)));
        assert_eq!(db.add_edge(id(1), id(9)).unwrap_err(), Error::MissingEndpoint(id(9)));
        assert!(db.update_node(id(9), &NodeUpdate::new()).unwrap_err().is_not_found());
        assert!(db.remove_node(id(9)).is_none());
        assert!(db.remove_edge(id(1), id(3)).is_none());
    }

    #[test]
    fn test_update_recomputes_when_enabled() {
        let db = chain(Config::default());
        let before = db.edge_weight(id(1), id(2)).unwrap();

        db.update_node(id(1), &NodeUpdate::new().activity(0.4).interaction(5.0).connection_count(2))
            .unwrap();
        let after = db.edge_weight(id(1), id(2)).unwrap();
        assert_ne!(before, after);
        assert_eq!(after, 1.0);
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let db = chain(Config::default());
        let before_node = db.get_node(id(1)).unwrap();
        let before_edges = db.edges();

        let err = db
            .update_node(id(1), &NodeUpdate::new().activity(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert_eq!(db.get_node(id(1)), Some(before_node));
        assert_eq!(db.edges(), before_edges);
    }

    #[test]
    fn test_from_graph_keeps_weights() {
        let mut graph = SocialGraph::new();
        graph.add_node(Node::new(1, "A")).unwrap();
        graph.add_node(Node::new(2, "B").with_activity(3.0)).unwrap();
        graph.add_edge(id(1), id(2), 0.75).unwrap();

        let db = SocialGraphDB::from_graph(graph, Config::default()).unwrap();
        assert_eq!(db.node_count(), 2);
        assert_eq!(db.edge_weight(id(1), id(2)).unwrap(), 0.75);
        assert_eq!(db.dijkstra(id(1), Some(id(2))).unwrap().cost, Some(0.75));

        db.recompute_weights().unwrap();
        assert_eq!(db.edge_weight(id(1), id(2)).unwrap(), 0.1);

        let bad = Config::default().with_weights(WeightConfig::default().with_activity(-1.0));
        assert!(SocialGraphDB::from_graph(SocialGraph::new(), bad).is_err());
    }

    #[test]
    fn test_update_keeps_weights_when_disabled() {
        let db = chain(Config::default().with_auto_recompute(false));
        let before = db.edge_weight(id(1), id(2)).unwrap();
        db.update_node(id(1), &NodeUpdate::new().activity(0.4)).unwrap();
        assert_eq!(db.edge_weight(id(1), id(2)).unwrap(), before);

        db.recompute_weights().unwrap();
        assert_ne!(db.edge_weight(id(1), id(2)).unwrap(), before);
    }

    #[test]
    fn test_rename_does_not_recompute() {
        let db = chain(Config::default());
        let before = db.edges();
        let node = db.update_node(id(2), &NodeUpdate::new().name("Bea")).unwrap();
        assert_eq!(node.name, "Bea");
        assert_eq!(db.edges(), before);
    }

    #[test]
    fn test_set_weights() {
        let db = chain(Config::default());
        let ignore_all = WeightConfig::new(0.0, 0.0, 0.0).unwrap();
        db.set_weights(ignore_all).unwrap();
        assert_eq!(db.weights(), ignore_all);
        assert!(db.edges().iter().all(|e| e.weight() == 1.0));

        let bad = WeightConfig::default().with_activity(-2.0);
        assert!(db.set_weights(bad).is_err());
        assert_eq!(db.weights(), ignore_all);
    }

    #[test]
    fn test_algorithms() {
        let db = chain(Config::default());
        assert_eq!(db.bfs(id(1)).unwrap().order, vec![id(1), id(2), id(3)]);
        assert_eq!(db.dfs(id(3)).unwrap().order, vec![id(3), id(2), id(1)]);
        assert_eq!(db.bfs_layers(id(2)).unwrap().layers.len(), 2);
        assert_eq!(db.connected_components().count, 1);
        assert_eq!(db.welsh_powell().color_count, 2);

        let path = db.dijkstra(id(1), Some(id(3))).unwrap();
        assert_eq!(path.path, vec![id(1), id(2), id(3)]);
        let astar = db.astar(id(1), id(3), None).unwrap();
        assert_eq!(astar.cost, path.cost);

        let centrality = db.centrality().unwrap();
        assert_eq!(centrality.normalized_degree[&id(2)], 1.0);
    }

    #[test]
    fn test_run_by_name() {
        let db = chain(Config::default());
        let params = Parameters::new().with("start", 1);
        let result = db.run("bfs", &params).unwrap();
        assert_eq!(result.kind(), "traversal");
        assert!(db.run("nope", &Parameters::new()).is_err());
    }

    #[test]
    fn test_views() {
        let db = chain(Config::default());
        assert_eq!(db.adjacency_list()[&id(2)], vec![id(1), id(3)]);
        assert_eq!(db.adjacency_matrix().get(id(1), id(3)), Some(0));
        assert_eq!(db.statistics().edge_count, 2);
        assert_eq!(db.read(|g| g.degree(id(2))), 2);

        let snapshot = db.snapshot();
        db.remove_node(id(2));
        assert_eq!(snapshot.edge_count(), 2);
        assert_eq!(db.edge_count(), 0);
    }

    #[test]
    fn test_sync_connection_counts() {
        let db = chain(Config::default());
        assert_eq!(db.sync_connection_counts(), 3);
        assert_eq!(db.get_node(id(3)).unwrap().connection_count, 1);
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let db = Arc::new(chain(Config::default()));
        let mut handles = Vec::new();
        for t in 0..4u64 {
            let db = Arc::clone(&db);
            handles.push(thread::spawn(move || {
                for i in 0..50u64 {
                    let n = 100 + t * 100 + i;
                    db.add_node(Node::new(n, "")).unwrap();
                    db.add_edge(id(1), id(n)).unwrap();
                    assert!(db.bfs(id(1)).unwrap().order.len() >= 3);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(db.node_count(), 3 + 200);
        assert_eq!(db.edge_count(), 2 + 200);
        assert!(db.read(|g| g.adjacency().is_symmetric()));
    }
}
