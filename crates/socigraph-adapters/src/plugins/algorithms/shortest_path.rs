//! Shortest paths: Dijkstra and A*.
//!
//! Both run on one best-first search over a binary heap with lazy deletion.
//! A node may sit in the heap several times; the first pop finalizes it and
//! every later pop of the same node is discarded. Relaxation only happens on
//! strict improvement. Edge weights are used directly as costs and must be
//! non-negative.

use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::{Error, Result};
use socigraph_common::utils::hash::FastHashMap;

use super::traits::{DistanceMap, GraphView, MinScored, PredecessorMap, require_node};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, ParameterType, Parameters};

/// Distance estimate used by A* to order its frontier.
///
/// A* only returns optimal paths when the estimate never exceeds the true
/// remaining cost. [`Heuristic::Zero`] always satisfies that. Position-based
/// estimates only do when positions are laid out in cost units, which the
/// graph does not enforce.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Always 0. A* degenerates to Dijkstra.
    #[default]
    Zero,
    /// Straight-line distance between node positions.
    Euclidean,
    /// Straight-line distance multiplied by a factor.
    Scaled(f64),
}

impl Heuristic {
    /// Estimated cost from `from` to `goal`. Missing positions estimate 0.
    pub fn estimate<G: GraphView + ?Sized>(&self, graph: &G, from: NodeId, goal: NodeId) -> f64 {
        let factor = match *self {
            Heuristic::Zero => return 0.0,
            Heuristic::Euclidean => 1.0,
            Heuristic::Scaled(factor) => factor,
        };
        match (graph.position(from), graph.position(goal)) {
            (Some(a), Some(b)) => a.distance(&b) * factor,
            _ => 0.0,
        }
    }

    /// Rejects a negative or non-finite scale factor.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Heuristic::Scaled(factor) if !factor.is_finite() || factor < 0.0 => {
                Err(Error::InvalidParameter(format!(
                    "heuristic scale must be finite and non-negative, got {factor}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Zero => f.write_str("zero"),
            Heuristic::Euclidean => f.write_str("euclidean"),
            Heuristic::Scaled(factor) => write!(f, "scaled:{factor}"),
        }
    }
}

/// Parses `zero`, `euclidean`, or `scaled:FACTOR`.
impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "zero" | "none" => return Ok(Heuristic::Zero),
            "euclidean" => return Ok(Heuristic::Euclidean),
            _ => {}
        }
        let factor = s
            .strip_prefix("scaled:")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "unknown heuristic '{s}', expected zero, euclidean, or scaled:FACTOR"
                ))
            })?;
        let heuristic = Heuristic::Scaled(factor);
        heuristic.validate()?;
        Ok(heuristic)
    }
}

/// Result of a Dijkstra or A* search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    /// Search origin.
    pub source: NodeId,
    /// Goal, if one was given.
    pub target: Option<NodeId>,
    /// Final distance of every node settled before the search stopped.
    pub distances: DistanceMap,
    /// Search-tree parent of every settled node. The source maps to `None`.
    pub predecessors: PredecessorMap,
    /// Source to target inclusive. Empty when there is no target or it is unreachable.
    pub path: Vec<NodeId>,
    /// Total cost of `path`. `None` when there is no target or it is unreachable.
    pub cost: Option<f64>,
}

impl ShortestPathResult {
    /// Returns true if the target was reached.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Final distance to a settled node.
    #[must_use]
    pub fn distance_to(&self, id: NodeId) -> Option<f64> {
        self.distances.get(&id).copied()
    }
}

/// Dijkstra from `source`, stopping early once `target` is settled.
///
/// Without a target every reachable node is settled.
///
/// # Errors
///
/// `NotFound` if `source` or `target` is not in the graph, `InvalidParameter`
/// if an edge with a negative or non-finite weight is relaxed.
pub fn dijkstra<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<ShortestPathResult> {
    best_first(graph, source, target, |_| 0.0)
}

/// A* from `source` to `goal` under `heuristic`.
///
/// # Errors
///
/// Same as [`dijkstra`].
pub fn astar<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    goal: NodeId,
    heuristic: Heuristic,
) -> Result<ShortestPathResult> {
    require_node(graph, goal)?;
    best_first(graph, source, Some(goal), |node| heuristic.estimate(graph, node, goal))
}

/// Cost and node sequence of the cheapest `source` to `target` path, `None`
/// if unreachable.
pub fn dijkstra_path<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<Option<(f64, Vec<NodeId>)>> {
    let result = dijkstra(graph, source, Some(target))?;
    Ok(result.cost.map(|cost| (cost, result.path)))
}

/// Walks a predecessor chain back from `target` to `source`.
///
/// Returns the path source-first, or an empty path if `target` was never
/// reached or the chain does not lead back to `source`.
#[must_use]
pub fn reconstruct_path(predecessors: &PredecessorMap, source: NodeId, target: NodeId) -> Vec<NodeId> {
    if !predecessors.contains_key(&target) {
        return Vec::new();
    }
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            Some(Some(prev)) if path.len() <= predecessors.len() => {
                current = *prev;
                path.push(current);
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

fn best_first<G, H>(
    graph: &G,
    source: NodeId,
    target: Option<NodeId>,
    heuristic: H,
) -> Result<ShortestPathResult>
where
    G: GraphView + ?Sized,
    H: Fn(NodeId) -> f64,
{
    require_node(graph, source)?;
    if let Some(target) = target {
        require_node(graph, target)?;
    }

    // Tentative state, settled state
    let mut best: FastHashMap<NodeId, (f64, Option<NodeId>)> = FastHashMap::default();
    let mut distances = DistanceMap::new();
    let mut predecessors = PredecessorMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(source, (0.0, None));
    heap.push(MinScored(heuristic(source), source));

    while let Some(MinScored(_, node)) = heap.pop() {
        if distances.contains_key(&node) {
            continue;
        }
        let Some(&(dist, prev)) = best.get(&node) else {
            continue;
        };
        distances.insert(node, dist);
        predecessors.insert(node, prev);

        if target == Some(node) {
            break;
        }

        for nb in graph.neighbors(node) {
            if distances.contains_key(&nb) {
                continue;
            }
            let Some(weight) = graph.edge_weight(node, nb) else {
                continue;
            };
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "edge {node}-{nb} has weight {weight}, shortest paths need finite non-negative weights"
                )));
            }
            let candidate = dist + weight;
            let improves = best.get(&nb).is_none_or(|&(current, _)| candidate < current);
            if improves {
                best.insert(nb, (candidate, Some(node)));
                heap.push(MinScored(candidate + heuristic(nb), nb));
            }
        }
    }

    let (path, cost) = match target {
        Some(t) if distances.contains_key(&t) => {
            (reconstruct_path(&predecessors, source, t), distances.get(&t).copied())
        }
        _ => (Vec::new(), None),
    };

    Ok(ShortestPathResult {
        source,
        target,
        distances,
        predecessors,
        path,
        cost,
    })
}

// === Algorithm Wrappers ===

static DIJKSTRA_PARAMS: [ParameterDef; 2] = [
    ParameterDef::required("source", ParameterType::Node, "Node to start from"),
    ParameterDef::optional("target", ParameterType::Node, "Stop once this node is settled"),
];

static ASTAR_PARAMS: [ParameterDef; 4] = [
    ParameterDef::required("source", ParameterType::Node, "Node to start from"),
    ParameterDef::required("target", ParameterType::Node, "Goal node"),
    ParameterDef::optional(
        "heuristic",
        ParameterType::String,
        "zero, euclidean, or scaled:FACTOR",
    ),
    ParameterDef::optional(
        "scale",
        ParameterType::Float,
        "Straight-line distance factor, same as heuristic=scaled:FACTOR",
    ),
];

/// Registry wrapper for [`dijkstra`].
pub struct DijkstraAlgorithm;

impl Algorithm for DijkstraAlgorithm {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn description(&self) -> &str {
        "Single-source weighted shortest paths"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &DIJKSTRA_PARAMS
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let source = params.get_node("source")?;
        let target = params.get_optional_node("target")?;
        dijkstra(graph, source, target).map(AlgorithmResult::ShortestPath)
    }
}

/// Registry wrapper for [`astar`].
#[derive(Debug, Default)]
pub struct AstarAlgorithm {
    default_heuristic: Heuristic,
}

impl AstarAlgorithm {
    /// Uses `heuristic` when the caller does not name one.
    #[must_use]
    pub fn new(default_heuristic: Heuristic) -> Self {
        Self { default_heuristic }
    }
}

impl Algorithm for AstarAlgorithm {
    fn name(&self) -> &str {
        "astar"
    }

    fn description(&self) -> &str {
        "Goal-directed shortest path with a position heuristic"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &ASTAR_PARAMS
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let source = params.get_node("source")?;
        let target = params.get_node("target")?;
        let heuristic = match (params.get_str("heuristic"), params.contains("scale")) {
            (Some(_), true) => {
                return Err(Error::InvalidParameter(
                    "give either 'heuristic' or 'scale', not both".to_string(),
                ));
            }
            (Some(raw), false) => raw.parse()?,
            (None, true) => {
                let scaled = Heuristic::Scaled(params.get_float_or("scale", 1.0)?);
                scaled.validate()?;
                scaled
            }
            (None, false) => self.default_heuristic,
        };
        astar(graph, source, target, heuristic).map(AlgorithmResult::ShortestPath)
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

    fn weighted(nodes: &[(u64, f64, f64)], edges: &[(u64, u64, f64)]) -> SocialGraph {
        let mut graph = SocialGraph::new();
        for &(n, x, y) in nodes {
            graph.add_node(Node::new(n, format!("n{n}")).with_position(x, y)).unwrap();
        }
        for &(u, v, w) in edges {
            graph.add_edge(id(u), id(v), w).unwrap();
        }
        graph
    }

    /// 1 -(1)- 2 -(1)- 4, 1 -(5)- 3 -(1)- 4, 1 -(0.5)- 5 -(0.5)- 3
    fn diamond() -> SocialGraph {
        weighted(
            &[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 1.0, 1.0), (4, 2.0, 0.0), (5, 0.5, 1.0)],
            &[(1, 2, 1.0), (2, 4, 1.0), (1, 3, 5.0), (3, 4, 1.0), (1, 5, 0.5), (5, 3, 0.5)],
        )
    }

    #[test]
    fn test_dijkstra_chain() {
        let g = weighted(&[(1, 0.0, 0.0), (2, 0.0, 0.0), (3, 0.0, 0.0)], &[(1, 2, 0.5), (2, 3, 0.25)]);
        let result = dijkstra(&g, id(1), Some(id(3))).unwrap();
        assert_eq!(result.path, ids(&[1, 2, 3]));
        assert_eq!(result.cost, Some(0.75));
        assert_eq!(result.predecessors[&id(1)], None);
    }

    #[test]
    fn test_dijkstra_all_targets() {
        let result = dijkstra(&diamond(), id(1), None).unwrap();
        assert_eq!(result.distance_to(id(3)), Some(1.0));
        assert_eq!(result.distance_to(id(4)), Some(2.0));
        assert_eq!(result.predecessors[&id(3)], Some(id(5)));
        assert!(result.path.is_empty());
        assert_eq!(result.cost, None);
    }

    #[test]
    fn test_relaxation_replaces_stale_entry() {
        // 3 is first queued at 5.0 through 1, then improved to 1.0 through 5
        let result = dijkstra(&diamond(), id(1), Some(id(3))).unwrap();
        assert_eq!(result.path, ids(&[1, 5, 3]));
        assert_eq!(result.cost, Some(1.0));
    }

    #[test]
    fn test_tie_prefers_lower_id() {
        // Both 1-2-4 and 1-5-3-4 cost 2.0; 2 is settled before 3 and claims 4 first
        let result = dijkstra(&diamond(), id(1), Some(id(4))).unwrap();
        assert_eq!(result.cost, Some(2.0));
        assert_eq!(result.path, ids(&[1, 2, 4]));
    }

    #[test]
    fn test_early_exit_reports_settled_only() {
        let result = dijkstra(&diamond(), id(1), Some(id(5))).unwrap();
        assert_eq!(result.cost, Some(0.5));
        assert!(result.distance_to(id(4)).is_none());
        assert_eq!(result.distances.len(), result.predecessors.len());
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        let g = weighted(&[(1, 0.0, 0.0), (2, 0.0, 0.0)], &[]);
        let result = dijkstra(&g, id(1), Some(id(2))).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.cost, None);
        assert!(!result.is_reachable());
        assert_eq!(dijkstra_path(&g, id(1), id(2)).unwrap(), None);

        let result = astar(&g, id(1), id(2), Heuristic::Euclidean).unwrap();
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_missing_endpoints_are_not_found() {
        let g = diamond();
        assert!(dijkstra(&g, id(9), None).unwrap_err().is_not_found());
        assert!(dijkstra(&g, id(1), Some(id(9))).unwrap_err().is_not_found());
        assert!(astar(&g, id(1), id(9), Heuristic::Zero).unwrap_err().is_not_found());
        assert!(astar(&g, id(9), id(1), Heuristic::Zero).unwrap_err().is_not_found());
    }

    #[test]
    fn test_source_equals_target() {
        let result = dijkstra(&diamond(), id(2), Some(id(2))).unwrap();
        assert_eq!(result.path, ids(&[2]));
        assert_eq!(result.cost, Some(0.0));
    }

    #[test]
    fn test_astar_zero_matches_dijkstra() {
        let g = diamond();
        for target in 1..=5 {
            let d = dijkstra(&g, id(1), Some(id(target))).unwrap();
            let a = astar(&g, id(1), id(target), Heuristic::Zero).unwrap();
            assert_eq!(d.cost, a.cost);
            assert_eq!(d.path, a.path);
        }
    }

    #[test]
    fn test_astar_euclidean_on_grid() {
        // Unit grid: positions are calibrated to cost, so the estimate is admissible
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for r in 0..4u64 {
            for c in 0..4u64 {
                nodes.push((r * 4 + c, c as f64, r as f64));
                if c > 0 {
                    edges.push((r * 4 + c - 1, r * 4 + c, 1.0));
                }
                if r > 0 {
                    edges.push(((r - 1) * 4 + c, r * 4 + c, 1.0));
                }
            }
        }
        let g = weighted(&nodes, &edges);
        let a = astar(&g, id(0), id(15), Heuristic::Euclidean).unwrap();
        let d = dijkstra(&g, id(0), Some(id(15))).unwrap();
        assert_eq!(a.cost, Some(6.0));
        assert_eq!(a.cost, d.cost);
        assert_eq!(a.path.len(), 7);
        assert!(a.distances.len() <= d.distances.len());
    }

    #[test]
    fn test_heuristic_parse() {
        assert_eq!("zero".parse::<Heuristic>().unwrap(), Heuristic::Zero);
        assert_eq!("Euclidean".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
        assert_eq!("scaled:0.5".parse::<Heuristic>().unwrap(), Heuristic::Scaled(0.5));
        assert!("scaled:-1".parse::<Heuristic>().is_err());
        assert!("manhattan".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::Scaled(2.0).to_string(), "scaled:2");
    }

    #[test]
    fn test_heuristic_estimate() {
        let g = weighted(&[(1, 0.0, 0.0), (2, 3.0, 4.0)], &[]);
        assert_eq!(Heuristic::Zero.estimate(&g, id(1), id(2)), 0.0);
        assert_eq!(Heuristic::Euclidean.estimate(&g, id(1), id(2)), 5.0);
        assert_eq!(Heuristic::Scaled(0.1).estimate(&g, id(1), id(2)), 0.5);
        assert_eq!(Heuristic::Euclidean.estimate(&g, id(1), id(7)), 0.0);
    }

    #[test]
    fn test_reconstruct_path() {
        let mut preds = PredecessorMap::new();
        preds.insert(id(1), None);
        preds.insert(id(2), Some(id(1)));
        preds.insert(id(3), Some(id(2)));
        assert_eq!(reconstruct_path(&preds, id(1), id(3)), ids(&[1, 2, 3]));
        assert!(reconstruct_path(&preds, id(1), id(4)).is_empty());

        // Chain that never reaches the source
        assert!(reconstruct_path(&preds, id(2), id(1)).is_empty());

        // Cycle in a corrupted map terminates
        let mut cyclic = PredecessorMap::new();
        cyclic.insert(id(1), Some(id(2)));
        cyclic.insert(id(2), Some(id(1)));
        assert!(reconstruct_path(&cyclic, id(3), id(1)).is_empty());
    }

    #[test]
    fn test_wrappers() {
        let g = diamond();
        let params = Parameters::new().with("source", 1).with("target", 4).with("heuristic", "zero");
        match AstarAlgorithm::default().execute(&g, &params).unwrap() {
            AlgorithmResult::ShortestPath(r) => assert_eq!(r.cost, Some(2.0)),
            other => panic!("unexpected result {other:?}"),
        }
        let bad = Parameters::new().with("source", 1).with("target", 4).with("heuristic", "bogus");
        assert!(matches!(
            AstarAlgorithm::default().execute(&g, &bad),
            Err(Error::InvalidParameter(_))
        ));
        let params = Parameters::new().with("source", 1);
        assert!(DijkstraAlgorithm.execute(&g, &params).is_ok());
    }

    #[test]
    fn test_astar_scale_parameter() {
        let g = diamond();
        let base = Parameters::new().with("source", 1).with("target", 4);
        match AstarAlgorithm::default().execute(&g, &base.clone().with("scale", 0.1)).unwrap() {
            AlgorithmResult::ShortestPath(r) => {
                assert_eq!(r.cost, Some(2.0));
                assert_eq!(r.path, ids(&[1, 2, 4]));
            }
            other => panic!("unexpected result {other:?}"),
        }

        for bad in [
            base.clone().with("scale", -1.0),
            base.clone().with("scale", "wide"),
            base.clone().with("scale", 0.5).with("heuristic", "zero"),
        ] {
            assert!(matches!(
                AstarAlgorithm::default().execute(&g, &bad),
                Err(Error::InvalidParameter(_))
            ));
        }
    }
}
