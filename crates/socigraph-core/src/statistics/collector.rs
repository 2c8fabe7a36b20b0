//! Statistics collection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::social::SocialGraph;

/// Degree figures across all nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DegreeSummary {
    /// Smallest degree, 0 for an empty graph.
    pub min: usize,
    /// Largest degree, 0 for an empty graph.
    pub max: usize,
    /// Mean degree, 0 for an empty graph.
    pub mean: f64,
    /// Number of nodes with degree 0.
    pub isolated: usize,
    /// Degree -> number of nodes with that degree.
    pub distribution: BTreeMap<usize, usize>,
}

/// Edge-weight figures. All `None` when there are no edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightSummary {
    /// Sum of all weights.
    pub total: f64,
    /// Smallest weight.
    pub min: Option<f64>,
    /// Largest weight.
    pub max: Option<f64>,
    /// Mean weight.
    pub mean: Option<f64>,
}

/// Summary of a graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// `edges / (n * (n - 1) / 2)`, 0 when `n <= 1`.
    pub density: f64,
    /// Degree summary.
    pub degree: DegreeSummary,
    /// Weight summary.
    pub weight: WeightSummary,
}

impl GraphStatistics {
    /// Collects statistics for `graph`.
    #[must_use]
    pub fn collect(graph: &SocialGraph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let mut degree = DegreeSummary {
            min: usize::MAX,
            ..DegreeSummary::default()
        };
        let mut degree_sum = 0usize;
        for id in graph.node_ids() {
            let d = graph.degree(id);
            degree.min = degree.min.min(d);
            degree.max = degree.max.max(d);
            degree_sum += d;
            if d == 0 {
                degree.isolated += 1;
            }
            *degree.distribution.entry(d).or_insert(0) += 1;
        }
        if node_count == 0 {
            degree.min = 0;
        } else {
            degree.mean = degree_sum as f64 / node_count as f64;
        }

        let mut weight = WeightSummary::default();
        for edge in graph.edges() {
            let w = edge.weight();
            weight.total += w;
            weight.min = Some(weight.min.map_or(w, |m| m.min(w)));
            weight.max = Some(weight.max.map_or(w, |m| m.max(w)));
        }
        if edge_count > 0 {
            weight.mean = Some(weight.total / edge_count as f64);
        }

        let density = if node_count <= 1 {
            0.0
        } else {
            let possible = node_count as f64 * (node_count as f64 - 1.0) / 2.0;
            edge_count as f64 / possible
        };

        Self {
            node_count,
            edge_count,
            density,
            degree,
            weight,
        }
    }
}

impl SocialGraph {
    /// Collects summary statistics.
    #[must_use]
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::collect(self)
    }
}
