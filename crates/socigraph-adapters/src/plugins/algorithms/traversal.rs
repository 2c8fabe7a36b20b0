//! Breadth-first and depth-first traversal.
//!
//! Both walks expand neighbors in ascending id order, so their output is
//! fully determined by the graph. DFS keeps an explicit stack and never
//! recurses, so path-shaped graphs of any length are safe.

use std::collections::VecDeque;

use serde::Serialize;
use smallvec::SmallVec;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::Result;
use socigraph_common::utils::hash::FastHashSet;

use super::traits::{GraphView, PredecessorMap, require_node};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, ParameterType, Parameters};

/// Visitation order and search tree of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// Where the walk started.
    pub start: NodeId,
    /// Nodes in the order they were visited.
    pub order: Vec<NodeId>,
    /// Parent on the search tree for every visited node.
    pub predecessors: PredecessorMap,
}

impl TraversalResult {
    /// Returns true if `id` was reached.
    #[must_use]
    pub fn visited(&self, id: NodeId) -> bool {
        self.predecessors.contains_key(&id)
    }
}

/// Nodes grouped by hop distance from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayersResult {
    /// Where the walk started.
    pub start: NodeId,
    /// `layers[d]` holds every node at distance `d`, ascending.
    pub layers: Vec<Vec<NodeId>>,
}

/// Breadth-first traversal from `start`.
///
/// # Errors
///
/// `NotFound` if `start` is not in the graph.
pub fn bfs<G: GraphView + ?Sized>(graph: &G, start: NodeId) -> Result<TraversalResult> {
    require_node(graph, start)?;

    let mut order = Vec::with_capacity(graph.node_count());
    let mut predecessors = PredecessorMap::new();
    let mut queue = VecDeque::new();

    predecessors.insert(start, None);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for nb in graph.neighbors(node) {
            if !predecessors.contains_key(&nb) {
                predecessors.insert(nb, Some(node));
                queue.push_back(nb);
            }
        }
    }

    Ok(TraversalResult {
        start,
        order,
        predecessors,
    })
}

/// Depth-first traversal from `start`.
///
/// Neighbors are pushed in descending order so they pop ascending, which
/// reproduces the visiting order of the recursive formulation. A node's
/// predecessor is the node that first discovered it.
///
/// # Errors
///
/// `NotFound` if `start` is not in the graph.
pub fn dfs<G: GraphView + ?Sized>(graph: &G, start: NodeId) -> Result<TraversalResult> {
    require_node(graph, start)?;

    let mut order = Vec::with_capacity(graph.node_count());
    let mut predecessors = PredecessorMap::new();
    let mut visited: FastHashSet<NodeId> = FastHashSet::default();
    let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();

    predecessors.insert(start, None);
    stack.push(start);

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        let neighbors: SmallVec<[NodeId; 16]> = graph.neighbors(node).collect();
        for &nb in neighbors.iter().rev() {
            if visited.contains(&nb) {
                continue;
            }
            predecessors.entry(nb).or_insert(Some(node));
            stack.push(nb);
        }
    }

    Ok(TraversalResult {
        start,
        order,
        predecessors,
    })
}

/// BFS hop layers from `start`.
///
/// # Errors
///
/// `NotFound` if `start` is not in the graph.
pub fn bfs_layers<G: GraphView + ?Sized>(graph: &G, start: NodeId) -> Result<LayersResult> {
    require_node(graph, start)?;

    let mut seen: FastHashSet<NodeId> = FastHashSet::default();
    seen.insert(start);
    let mut layers = Vec::new();
    let mut frontier = vec![start];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &node in &frontier {
            for nb in graph.neighbors(node) {
                if seen.insert(nb) {
                    next.push(nb);
                }
            }
        }
        next.sort_unstable();
        layers.push(frontier);
        frontier = next;
    }

    Ok(LayersResult { start, layers })
}

// === Algorithm Wrappers ===

static START_PARAM: [ParameterDef; 1] = [ParameterDef::required(
    "start",
    ParameterType::Node,
    "Node to start from",
)];

/// Registry wrapper for [`bfs`].
pub struct BfsAlgorithm;

impl Algorithm for BfsAlgorithm {
    fn name(&self) -> &str {
        "bfs"
    }

    fn description(&self) -> &str {
        "Breadth-first traversal order and parent map"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &START_PARAM
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let start = params.get_node("start")?;
        bfs(graph, start).map(AlgorithmResult::Traversal)
    }
}

/// Registry wrapper for [`dfs`].
pub struct DfsAlgorithm;

impl Algorithm for DfsAlgorithm {
    fn name(&self) -> &str {
        "dfs"
    }

    fn description(&self) -> &str {
        "Depth-first traversal order and parent map"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &START_PARAM
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let start = params.get_node("start")?;
        dfs(graph, start).map(AlgorithmResult::Traversal)
    }
}

/// Registry wrapper for [`bfs_layers`].
pub struct BfsLayersAlgorithm;

impl Algorithm for BfsLayersAlgorithm {
    fn name(&self) -> &str {
        "bfs_layers"
    }

    fn description(&self) -> &str {
        "Nodes grouped by hop distance from a start node"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &START_PARAM
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let start = params.get_node("start")?;
        bfs_layers(graph, start).map(AlgorithmResult::Layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socigraph_core::{Node, SocialGraph};

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    fn ids(ns: &[u64]) -> Vec<NodeId> {
        ns.iter().copied().map(NodeId::new).collect()
    }

    fn graph(nodes: &[u64], edges: &[(u64, u64)]) -> SocialGraph {
        let mut graph = SocialGraph::new();
        for &n in nodes {
            graph.add_node(Node::new(n, format!("n{n}"))).unwrap();
        }
        for &(u, v) in edges {
            graph.add_edge(id(u), id(v), 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_bfs_chain() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let result = bfs(&g, id(1)).unwrap();
        assert_eq!(result.order, ids(&[1, 2, 3]));
        assert_eq!(result.predecessors[&id(1)], None);
        assert_eq!(result.predecessors[&id(3)], Some(id(2)));
    }

    #[test]
    fn test_bfs_levels_then_ids() {
        // 1 - {5, 2}, 5 - 3, 2 - 4
        let g = graph(&[1, 2, 3, 4, 5], &[(1, 5), (1, 2), (5, 3), (2, 4)]);
        let result = bfs(&g, id(1)).unwrap();
        assert_eq!(result.order, ids(&[1, 2, 5, 4, 3]));
    }

    #[test]
    fn test_bfs_skips_other_components() {
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);
        let result = bfs(&g, id(3)).unwrap();
        assert_eq!(result.order, ids(&[3, 4]));
        assert!(!result.visited(id(1)));
    }

    #[test]
    fn test_bfs_missing_start() {
        let g = graph(&[1], &[]);
        assert!(bfs(&g, id(9)).unwrap_err().is_not_found());
        assert!(dfs(&g, id(9)).unwrap_err().is_not_found());
        assert!(bfs_layers(&g, id(9)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_isolated_start() {
        let g = graph(&[1, 2], &[]);
        assert_eq!(bfs(&g, id(2)).unwrap().order, ids(&[2]));
        assert_eq!(dfs(&g, id(2)).unwrap().order, ids(&[2]));
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        // 1 - 2 - 4, 1 - 3, 2 - 3
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4), (2, 3)]);
        let result = dfs(&g, id(1)).unwrap();
        assert_eq!(result.order, ids(&[1, 2, 3, 4]));
        // 3 was first discovered from 1
        assert_eq!(result.predecessors[&id(3)], Some(id(1)));
        assert_eq!(result.predecessors[&id(4)], Some(id(2)));
    }

    #[test]
    fn test_dfs_long_path_does_not_overflow() {
        let n = 50_000u64;
        let nodes: Vec<u64> = (0..n).collect();
        let edges: Vec<(u64, u64)> = (1..n).map(|i| (i - 1, i)).collect();
        let g = graph(&nodes, &edges);
        let result = dfs(&g, id(0)).unwrap();
        assert_eq!(result.order.len(), n as usize);
        assert_eq!(result.order.last(), Some(&id(n - 1)));
    }

    #[test]
    fn test_bfs_layers() {
        let g = graph(&[1, 2, 3, 4, 5, 6], &[(1, 5), (1, 2), (5, 3), (2, 4)]);
        let result = bfs_layers(&g, id(1)).unwrap();
        assert_eq!(result.layers, vec![ids(&[1]), ids(&[2, 5]), ids(&[3, 4])]);
    }

    #[test]
    fn test_wrappers() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let params = Parameters::new().with("start", 2);
        match DfsAlgorithm.execute(&g, &params).unwrap() {
            AlgorithmResult::Traversal(t) => assert_eq!(t.order, ids(&[2, 1, 3])),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(BfsAlgorithm.execute(&g, &Parameters::new()).is_err());
    }
}
