//! Degree and closeness centrality.

use std::collections::BTreeMap;

use serde::Serialize;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::Result;

use super::shortest_path::dijkstra;
use super::traits::GraphView;
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, ParameterType, Parameters};

/// Per-node centrality scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityResult {
    /// Raw degree.
    pub degree: BTreeMap<NodeId, usize>,
    /// Degree divided by `n - 1`.
    pub normalized_degree: BTreeMap<NodeId, f64>,
    /// Closeness over the reachable set.
    pub closeness: BTreeMap<NodeId, f64>,
}

impl CentralityResult {
    /// The `k` highest-degree nodes, ties broken by ascending id.
    #[must_use]
    pub fn top_by_degree(&self, k: usize) -> Vec<(NodeId, usize)> {
        rank_by_degree(&self.degree, k)
    }
}

fn rank_by_degree(degree: &BTreeMap<NodeId, usize>, k: usize) -> Vec<(NodeId, usize)> {
    let mut ranked: Vec<(NodeId, usize)> = degree.iter().map(|(&id, &d)| (id, d)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(k);
    ranked
}

/// Normalized degree centrality: `degree / (n - 1)`, 0 when `n <= 1`.
pub fn degree_centrality<G: GraphView + ?Sized>(graph: &G) -> BTreeMap<NodeId, f64> {
    let n = graph.node_count();
    graph
        .node_ids()
        .into_iter()
        .map(|id| {
            let score = if n <= 1 {
                0.0
            } else {
                graph.degree(id) as f64 / (n - 1) as f64
            };
            (id, score)
        })
        .collect()
}

/// Closeness centrality, normalized by the size of each node's reachable set.
///
/// For a node that reaches `r` other nodes at positive distances summing to
/// `s`, closeness is `r / s`. Nodes at distance 0 are not counted, and a
/// node with nothing left to count scores 0. Disconnected graphs are handled
/// without penalizing small components for the nodes they cannot see.
///
/// Runs one Dijkstra per node.
pub fn closeness_centrality<G: GraphView + ?Sized>(graph: &G) -> Result<BTreeMap<NodeId, f64>> {
    let mut scores = BTreeMap::new();
    for id in graph.node_ids() {
        let result = dijkstra(graph, id, None)?;
        let (reachable, total) = result
            .distances
            .iter()
            .filter(|&(&other, &d)| other != id && d > 0.0)
            .fold((0usize, 0.0f64), |(count, sum), (_, &d)| (count + 1, sum + d));
        let score = if reachable == 0 || total == 0.0 {
            0.0
        } else {
            reachable as f64 / total
        };
        scores.insert(id, score);
    }
    Ok(scores)
}

/// Degree, normalized degree, and closeness for every node.
pub fn centrality<G: GraphView + ?Sized>(graph: &G) -> Result<CentralityResult> {
    let degree = graph
        .node_ids()
        .into_iter()
        .map(|id| (id, graph.degree(id)))
        .collect();
    Ok(CentralityResult {
        degree,
        normalized_degree: degree_centrality(graph),
        closeness: closeness_centrality(graph)?,
    })
}

// === Algorithm Wrappers ===

/// Registry wrapper for [`centrality`].
pub struct CentralityAlgorithm;

impl Algorithm for CentralityAlgorithm {
    fn name(&self) -> &str {
        "centrality"
    }

    fn description(&self) -> &str {
        "Degree and closeness centrality for every node"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &dyn GraphView, _params: &Parameters) -> Result<AlgorithmResult> {
        centrality(graph).map(AlgorithmResult::Centrality)
    }
}

static DEGREE_PARAMS: [ParameterDef; 1] = [ParameterDef::optional(
    "top",
    ParameterType::Integer,
    "Keep only the k highest-degree nodes",
)];

/// Registry wrapper for degree-only centrality. Skips the closeness pass.
pub struct DegreeCentralityAlgorithm;

impl Algorithm for DegreeCentralityAlgorithm {
    fn name(&self) -> &str {
        "degree_centrality"
    }

    fn description(&self) -> &str {
        "Degree and normalized degree, optionally limited to the top k"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &DEGREE_PARAMS
    }

    fn execute(&self, graph: &dyn GraphView, params: &Parameters) -> Result<AlgorithmResult> {
        let mut degree: BTreeMap<NodeId, usize> = graph
            .node_ids()
            .into_iter()
            .map(|id| (id, graph.degree(id)))
            .collect();
        let mut normalized_degree = degree_centrality(graph);

        if params.contains("top") {
            let k = params.get_usize_or("top", degree.len())?;
            degree = rank_by_degree(&degree, k).into_iter().collect();
            normalized_degree.retain(|id, _| degree.contains_key(id));
        }

        Ok(AlgorithmResult::Centrality(CentralityResult {
            degree,
            normalized_degree,
            closeness: BTreeMap::new(),
        }))
    }
}
