//! Shared algorithm plumbing: the graph capability trait, the priority-queue
//! entry, and the map aliases used by result records.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use socigraph_common::types::NodeId;
use socigraph_common::utils::error::{Error, Result};
use socigraph_core::{Position, SocialGraph};

/// Distance from a source, per finalized node.
pub type DistanceMap = BTreeMap<NodeId, f64>;

/// Predecessor on the search tree, per visited node. The root maps to `None`.
pub type PredecessorMap = BTreeMap<NodeId, Option<NodeId>>;

/// Read-only graph capability every algorithm runs against.
///
/// `node_ids` and `neighbors` must yield ascending ids; traversal order and
/// every tie-break depend on it.
pub trait GraphView {
    /// Returns true if the node exists.
    fn contains_node(&self, id: NodeId) -> bool;

    /// All node ids, ascending.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Neighbors of `id`, ascending. Empty for unknown ids.
    fn neighbors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Number of neighbors, 0 for unknown ids.
    fn degree(&self, id: NodeId) -> usize;

    /// Weight of the edge between `u` and `v`, if they are connected.
    fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<f64>;

    /// Position of a node, if it exists.
    fn position(&self, id: NodeId) -> Option<Position>;

    /// Number of nodes.
    fn node_count(&self) -> usize;
}

impl GraphView for SocialGraph {
    fn contains_node(&self, id: NodeId) -> bool {
        SocialGraph::contains_node(self, id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        SocialGraph::node_ids(self)
    }

    fn neighbors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(SocialGraph::neighbors(self, id))
    }

    fn degree(&self, id: NodeId) -> usize {
        SocialGraph::degree(self, id)
    }

    fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.edge(u, v).map(|e| e.weight())
    }

    fn position(&self, id: NodeId) -> Option<Position> {
        self.node(id).map(|n| n.position)
    }

    fn node_count(&self) -> usize {
        SocialGraph::node_count(self)
    }
}

/// Fails with `NotFound` unless the node exists.
pub(crate) fn require_node<G: GraphView + ?Sized>(graph: &G, id: NodeId) -> Result<()> {
    if graph.contains_node(id) {
        Ok(())
    } else {
        Err(Error::node_not_found(id))
    }
}

/// A min-heap entry for `std::collections::BinaryHeap`.
///
/// Lower scores pop first; equal scores pop the lower id first. Scores are
/// compared with `f64::total_cmp`, so the order is total even for NaN.
#[derive(Debug, Clone, Copy)]
pub struct MinScored(pub f64, pub NodeId);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap
        other.0.total_cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socigraph_core::Node;
    use std::collections::BinaryHeap;

    #[test]
    fn test_min_scored_pops_smallest_then_lowest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(2.0, NodeId::new(1)));
        heap.push(MinScored(0.5, NodeId::new(9)));
        heap.push(MinScored(0.5, NodeId::new(3)));
        heap.push(MinScored(1.0, NodeId::new(0)));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|m| m.1.as_u64()).collect();
        assert_eq!(order, vec![3, 9, 0, 1]);
    }

    #[test]
    fn test_social_graph_view() {
        let mut graph = SocialGraph::new();
        graph.add_node(Node::new(2, "B").with_position(3.0, 4.0)).unwrap();
        graph.add_node(Node::new(1, "A")).unwrap();
        graph.add_edge(NodeId::new(1), NodeId::new(2), 0.5).unwrap();

        let view: &dyn GraphView = &graph;
        assert_eq!(view.node_ids(), vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(view.edge_weight(NodeId::new(2), NodeId::new(1)), Some(0.5));
        assert_eq!(view.edge_weight(NodeId::new(2), NodeId::new(7)), None);
        assert_eq!(view.position(NodeId::new(2)), Some(Position::new(3.0, 4.0)));
        assert_eq!(view.neighbors(NodeId::new(1)).collect::<Vec<_>>(), vec![NodeId::new(2)]);
        assert!(require_node(view, NodeId::new(5)).unwrap_err().is_not_found());
    }
}
