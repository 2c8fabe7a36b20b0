//! Welsh–Powell greedy coloring.
//!
//! Nodes are ordered by descending degree, ties by ascending id. Each pass
//! takes the first uncolored node in that order, gives it the lowest color
//! none of its colored neighbors has, and then hands the same color to every
//! later uncolored node that has no neighbor holding it yet. A pass fills one
//! color class as far as it will go before the next color is opened.

use std::collections::BTreeMap;

use serde::Serialize;
use smallvec::SmallVec;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::Result;

use super::traits::GraphView;
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, Parameters};

/// A proper vertex coloring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoringResult {
    /// Color index of every node, starting at 0.
    pub colors: BTreeMap<NodeId, usize>,
    /// Number of colors used, 0 for an empty graph.
    pub color_count: usize,
}

impl ColoringResult {
    /// Color of a node.
    #[must_use]
    pub fn color_of(&self, id: NodeId) -> Option<usize> {
        self.colors.get(&id).copied()
    }

    /// Members of each color class, ascending.
    #[must_use]
    pub fn classes(&self) -> BTreeMap<usize, Vec<NodeId>> {
        let mut classes: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
        for (&id, &color) in &self.colors {
            classes.entry(color).or_default().push(id);
        }
        classes
    }
}

/// Colors the graph with the Welsh–Powell heuristic.
pub fn welsh_powell<G: GraphView + ?Sized>(graph: &G) -> ColoringResult {
    let mut order = graph.node_ids();
    order.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)).then(a.cmp(&b)));

    let mut colors: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut color_count = 0;

    let neighbor_has = |colors: &BTreeMap<NodeId, usize>, node: NodeId, color: usize| {
        graph.neighbors(node).any(|nb| colors.get(&nb) == Some(&color))
    };

    for (i, &node) in order.iter().enumerate() {
        if colors.contains_key(&node) {
            continue;
        }

        let used: SmallVec<[usize; 8]> = graph
            .neighbors(node)
            .filter_map(|nb| colors.get(&nb).copied())
            .collect();
        let color = (0..).find(|c| !used.contains(c)).unwrap_or(0);
        colors.insert(node, color);
        color_count = color_count.max(color + 1);

        for &other in &order[i + 1..] {
            if !colors.contains_key(&other) && !neighbor_has(&colors, other, color) {
                colors.insert(other, color);
            }
        }
    }

    ColoringResult {
        colors,
        color_count,
    }
}

// === Algorithm Wrappers ===

/// Registry wrapper for [`welsh_powell`].
pub struct WelshPowellAlgorithm;

impl Algorithm for WelshPowellAlgorithm {
    fn name(&self) -> &str {
        "welsh_powell"
    }

    fn description(&self) -> &str {
        "Greedy vertex coloring in descending-degree order"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &dyn GraphView, _params: &Parameters) -> Result<AlgorithmResult> {
        Ok(AlgorithmResult::Coloring(welsh_powell(graph)))
    }
}
