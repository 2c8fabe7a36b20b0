//! The social graph container.

use std::collections::BTreeMap;

use socigraph_common::types::{EdgeKey, NodeId};
use socigraph_common::utils::error::{Error, Result};
use socigraph_common::utils::hash::FastHashMap;

use super::{Edge, Node, NodeUpdate};
use crate::index::adjacency::{AdjacencyIndex, Neighbors};
use crate::weight::WeightFunction;

/// Where a new edge gets its weight from.
pub enum WeightSource<'a> {
    /// A fixed weight.
    Constant(f64),
    /// A weight computed once from the endpoints at insertion time.
    Function(&'a dyn WeightFunction),
}

impl Default for WeightSource<'_> {
    fn default() -> Self {
        WeightSource::Constant(1.0)
    }
}

impl From<f64> for WeightSource<'_> {
    fn from(weight: f64) -> Self {
        WeightSource::Constant(weight)
    }
}

impl<'a, W: WeightFunction> From<&'a W> for WeightSource<'a> {
    fn from(function: &'a W) -> Self {
        WeightSource::Function(function)
    }
}

/// An undirected weighted graph of social nodes.
///
/// The graph owns every node and edge. Its adjacency index is updated in the
/// same call as the edge map, so the two never disagree:
///
/// - every edge endpoint and adjacency entry is a known node,
/// - `v` is a neighbor of `u` iff `u` is a neighbor of `v` iff edge `(u, v)` exists,
/// - there are no self-loops and at most one edge per unordered pair.
///
/// The graph has no internal locking. Hosts that share it across threads wrap
/// the whole value in their own lock.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// Node records by id.
    nodes: FastHashMap<NodeId, Node>,
    /// Edge records by undirected key, in ascending key order.
    edges: BTreeMap<EdgeKey, Edge>,
    /// Neighbor sets.
    adjacency: AdjacencyIndex,
}

impl SocialGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Node Operations ===

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] if a node with the same id exists
    /// - [`Error::InvalidParameter`] if an attribute or coordinate is not finite
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(Error::DuplicateId(node.id));
        }
        node.validate()?;
        self.adjacency.insert_node(node.id);
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Replaces a node with a copy carrying the fields named in `update`.
    ///
    /// Incident edge weights are left alone; call
    /// [`recompute_all_weights`](Self::recompute_all_weights) afterwards if
    /// the change should show up in them.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the node does not exist
    /// - [`Error::InvalidParameter`] if the result would carry a non-finite
    ///   value; the stored record is left as it was
    pub fn update_node(&mut self, id: NodeId, update: &NodeUpdate) -> Result<&Node> {
        let slot = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| Error::node_not_found(id))?;
        let replacement = slot.with_changes(update);
        replacement.validate()?;
        *slot = replacement;
        Ok(&*slot)
    }

    /// Removes a node and every edge touching it.
    ///
    /// Returns the removed node, or `None` if there was nothing to remove.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(&id) {
            return None;
        }
        let incident: Vec<NodeId> = self.adjacency.neighbors(id).collect();
        for nb in incident {
            self.remove_edge(id, nb);
        }
        self.adjacency.remove_node(id);
        self.nodes.remove(&id)
    }

    /// Gets a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in ascending order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_ids().into_iter().filter_map(move |id| self.nodes.get(&id))
    }

    // === Edge Operations ===

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// The weight is either a constant or computed once from the two endpoint
    /// records as they are right now.
    ///
    /// ```
    /// use socigraph_core::{Node, SocialGraph, WeightConfig};
    /// use socigraph_common::NodeId;
    ///
    /// let mut graph = SocialGraph::new();
    /// graph.add_node(Node::new(1, "A")).unwrap();
    /// graph.add_node(Node::new(2, "B")).unwrap();
    /// graph.add_node(Node::new(3, "C")).unwrap();
    ///
    /// graph.add_edge(NodeId::new(1), NodeId::new(2), 0.5).unwrap();
    /// graph.add_edge(NodeId::new(2), NodeId::new(3), &WeightConfig::default()).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::SelfLoop`] if `u == v`
    /// - [`Error::MissingEndpoint`] if either node does not exist
    /// - [`Error::DuplicateEdge`] if the pair is already connected, in either order
    /// - [`Error::InvalidParameter`] if the weight is negative or not finite
    pub fn add_edge<'a>(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: impl Into<WeightSource<'a>>,
    ) -> Result<Edge> {
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        let (a, b) = match (self.nodes.get(&u), self.nodes.get(&v)) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => return Err(Error::MissingEndpoint(u)),
            (_, None) => return Err(Error::MissingEndpoint(v)),
        };
        let key = EdgeKey::new(u, v);
        if self.edges.contains_key(&key) {
            return Err(Error::DuplicateEdge(key));
        }

        let weight = match weight.into() {
            WeightSource::Constant(w) => w,
            WeightSource::Function(f) => f.weight(a, b),
        };
        check_weight(key, weight)?;

        let edge = Edge::new(key, weight);
        self.edges.insert(key, edge);
        self.adjacency.add_edge(u, v);
        Ok(edge)
    }

    /// Removes the edge between `u` and `v`.
    ///
    /// Returns the removed edge, or `None` if there was none.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Option<Edge> {
        let edge = self.edges.remove(&EdgeKey::new(u, v))?;
        self.adjacency.remove_edge(u, v);
        Some(edge)
    }

    /// Gets the edge between `u` and `v`, in either order.
    #[must_use]
    pub fn edge(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(u, v))
    }

    /// Returns true if `u` and `v` are connected.
    #[must_use]
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// The weight of the edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the nodes are not connected.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Result<f64> {
        let key = EdgeKey::new(u, v);
        self.edges
            .get(&key)
            .map(Edge::weight)
            .ok_or_else(|| Error::edge_not_found(key))
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    // === Adjacency ===

    /// Neighbors of `id` in ascending order. Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> Neighbors<'_> {
        self.adjacency.neighbors(id)
    }

    /// Number of neighbors, 0 for unknown ids.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.degree(id)
    }

    /// Read access to the adjacency index.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    // === Bulk Operations ===

    /// Re-evaluates every edge weight from the current endpoint records.
    ///
    /// All weights are computed before any is written, so a rejected weight
    /// leaves the graph untouched.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the function yields a negative or
    /// non-finite weight for any edge.
    pub fn recompute_all_weights(&mut self, weight_fn: &dyn WeightFunction) -> Result<()> {
        let mut fresh = Vec::with_capacity(self.edges.len());
        for key in self.edges.keys() {
            let (Some(a), Some(b)) = (self.nodes.get(&key.u()), self.nodes.get(&key.v())) else {
                return Err(Error::edge_not_found(*key));
            };
            let weight = weight_fn.weight(a, b);
            check_weight(*key, weight)?;
            fresh.push(weight);
        }
        for (edge, weight) in self.edges.values_mut().zip(fresh) {
            edge.set_weight(weight);
        }
        Ok(())
    }

    /// Sets every node's `connection_count` to its actual degree.
    ///
    /// Returns the number of nodes whose count changed.
    pub fn sync_connection_counts(&mut self) -> usize {
        let mut changed = 0;
        for node in self.nodes.values_mut() {
            let degree = self.adjacency.degree(node.id) as u32;
            if node.connection_count != degree {
                *node = node.with_changes(&NodeUpdate::new().connection_count(degree));
                changed += 1;
            }
        }
        changed
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }
}

fn check_weight(key: EdgeKey, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "weight of edge {key} must be finite and non-negative, got {weight}"
        )))
    }
}
