//! Connected components of the undirected graph.

use std::collections::VecDeque;

use serde::Serialize;
use socigraph_common::types::NodeId;
use socigraph_common::utils::error::Result;
use socigraph_common::utils::hash::FastHashSet;

use super::traits::GraphView;
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, Parameters};

/// Partition of the node set into connected components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentsResult {
    /// Components ordered by their smallest id. Members are in discovery order.
    pub components: Vec<Vec<NodeId>>,
    /// Number of components.
    pub count: usize,
}

impl ComponentsResult {
    /// Index of the component holding `id`.
    #[must_use]
    pub fn component_of(&self, id: NodeId) -> Option<usize> {
        self.components.iter().position(|members| members.contains(&id))
    }

    /// Size of the largest component, 0 for an empty graph.
    #[must_use]
    pub fn largest(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Finds every connected component.
///
/// Seeds are taken in ascending id order and each seed is expanded
/// breadth-first, so a component's first member is always its smallest id.
pub fn connected_components<G: GraphView + ?Sized>(graph: &G) -> ComponentsResult {
    let mut assigned: FastHashSet<NodeId> = FastHashSet::default();
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for seed in graph.node_ids() {
        if !assigned.insert(seed) {
            continue;
        }
        let mut members = Vec::new();
        queue.push_back(seed);
        while let Some(node) = queue.pop_front() {
            members.push(node);
            for nb in graph.neighbors(node) {
                if assigned.insert(nb) {
                    queue.push_back(nb);
                }
            }
        }
        components.push(members);
    }

    ComponentsResult {
        count: components.len(),
        components,
    }
}

/// Number of connected components.
pub fn connected_component_count<G: GraphView + ?Sized>(graph: &G) -> usize {
    connected_components(graph).count
}

// === Algorithm Wrappers ===

/// Registry wrapper for [`connected_components`].
pub struct ConnectedComponentsAlgorithm;

impl Algorithm for ConnectedComponentsAlgorithm {
    fn name(&self) -> &str {
        "connected_components"
    }

    fn description(&self) -> &str {
        "Partition of the graph into connected components"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &dyn GraphView, _params: &Parameters) -> Result<AlgorithmResult> {
        Ok(AlgorithmResult::Components(connected_components(graph)))
    }
}
