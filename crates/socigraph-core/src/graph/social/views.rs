//! Read-only adjacency views for display and export collaborators.

use std::collections::BTreeMap;

use serde::Serialize;
use socigraph_common::types::NodeId;

use super::SocialGraph;

/// A symmetric 0/1 adjacency matrix over the graph's nodes in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    /// Row/column labels.
    pub ids: Vec<NodeId>,
    /// `rows[i][j] == 1` iff `ids[i]` and `ids[j]` are connected.
    pub rows: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// The cell for a pair of ids, `None` if either id is not a label.
    #[must_use]
    pub fn get(&self, u: NodeId, v: NodeId) -> Option<u8> {
        let i = self.ids.binary_search(&u).ok()?;
        let j = self.ids.binary_search(&v).ok()?;
        Some(self.rows[i][j])
    }

    /// Matrix dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true for an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl SocialGraph {
    /// Every node mapped to its ascending neighbor list.
    #[must_use]
    pub fn adjacency_list(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        self.node_ids()
            .into_iter()
            .map(|id| (id, self.neighbors(id).collect()))
            .collect()
    }

    /// The adjacency matrix in ascending id order.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let ids = self.node_ids();
        let index: BTreeMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let mut rows = vec![vec![0u8; ids.len()]; ids.len()];
        for edge in self.edges() {
            let (i, j) = (index[&edge.u()], index[&edge.v()]);
            rows[i][j] = 1;
            rows[j][i] = 1;
        }
        AdjacencyMatrix { ids, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::social::Node;

    fn graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        for n in [1, 2, 3, 4] {
            graph.add_node(Node::new(n, "")).unwrap();
        }
        graph.add_edge(NodeId::new(2), NodeId::new(1), 1.0).unwrap();
        graph.add_edge(NodeId::new(2), NodeId::new(3), 1.0).unwrap();
        graph
    }

    #[test]
    fn test_adjacency_list() {
        let list = graph().adjacency_list();
        assert_eq!(list.len(), 4);
        assert_eq!(list[&NodeId::new(2)], vec![NodeId::new(1), NodeId::new(3)]);
        assert!(list[&NodeId::new(4)].is_empty());
    }

    #[test]
    fn test_adjacency_matrix_is_symmetric() {
        let matrix = graph().adjacency_matrix();
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix.rows[0], vec![0, 1, 0, 0]);
        assert_eq!(matrix.rows[1], vec![1, 0, 1, 0]);
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.rows[i][j], matrix.rows[j][i]);
            }
        }
        assert_eq!(matrix.get(NodeId::new(3), NodeId::new(2)), Some(1));
        assert_eq!(matrix.get(NodeId::new(9), NodeId::new(2)), None);
    }

    #[test]
    fn test_empty_views() {
        let graph = SocialGraph::new();
        assert!(graph.adjacency_list().is_empty());
        assert!(graph.adjacency_matrix().is_empty());
    }
}
