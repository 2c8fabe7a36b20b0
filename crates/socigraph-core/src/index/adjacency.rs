//! Symmetric adjacency index.
//!
//! Every node owns an ordered set of neighbor ids. The index is undirected:
//! inserting `u - v` records `v` under `u` and `u` under `v`, and the two
//! entries are only ever added or removed together.
//!
//! Neighbor sets are `BTreeSet`s so that iteration is always in ascending id
//! order. Traversal output depends on that order.

use std::collections::BTreeSet;
use std::collections::btree_set;

use socigraph_common::types::NodeId;
use socigraph_common::utils::hash::FastHashMap;

/// Undirected adjacency index.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Neighbor sets indexed by node.
    lists: FastHashMap<NodeId, BTreeSet<NodeId>>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl AdjacencyIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node with an empty neighbor set.
    ///
    /// Returns false if the node was already present.
    pub fn insert_node(&mut self, id: NodeId) -> bool {
        if self.lists.contains_key(&id) {
            return false;
        }
        self.lists.insert(id, BTreeSet::new());
        true
    }

    /// Removes a node's entry, returning its former neighbors.
    ///
    /// The caller must have removed every incident edge first; any neighbor
    /// still listed here is also unlinked from the other side so the index
    /// stays symmetric.
    pub fn remove_node(&mut self, id: NodeId) -> Option<BTreeSet<NodeId>> {
        let neighbors = self.lists.remove(&id)?;
        for nb in &neighbors {
            if let Some(list) = self.lists.get_mut(nb) {
                if list.remove(&id) {
                    self.edge_count -= 1;
                }
            }
        }
        Some(neighbors)
    }

    /// Returns true if the node has an entry.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.lists.contains_key(&id)
    }

    /// Links `u` and `v` in both directions.
    ///
    /// Returns false if the link already existed or either side is unknown.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v || !self.lists.contains_key(&u) || !self.lists.contains_key(&v) {
            return false;
        }
        let inserted = self.lists.get_mut(&u).is_some_and(|list| list.insert(v));
        if !inserted {
            return false;
        }
        if let Some(list) = self.lists.get_mut(&v) {
            list.insert(u);
        }
        self.edge_count += 1;
        true
    }

    /// Unlinks `u` and `v` in both directions.
    ///
    /// Returns false if they were not linked.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let removed = self.lists.get_mut(&u).is_some_and(|list| list.remove(&v));
        if let Some(list) = self.lists.get_mut(&v) {
            list.remove(&u);
        }
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// Returns true if `u` and `v` are linked.
    #[must_use]
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.lists.get(&u).is_some_and(|list| list.contains(&v))
    }

    /// Neighbors of `id` in ascending order. Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> Neighbors<'_> {
        Neighbors {
            inner: self.lists.get(&id).map(|list| list.iter()),
        }
    }

    /// Size of the neighbor set, 0 for unknown ids.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.lists.get(&id).map_or(0, BTreeSet::len)
    }

    /// Number of nodes with an entry.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks that every link is recorded on both sides.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.lists.iter().all(|(u, list)| {
            list.iter()
                .all(|v| self.lists.get(v).is_some_and(|back| back.contains(u)))
        })
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.edge_count = 0;
    }
}

/// Iterator over a node's neighbors in ascending order.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Option<btree_set::Iter<'a, NodeId>>,
}

impl Iterator for Neighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<NodeId> {
        self.inner.as_mut()?.next_back().copied()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
