//! Edge records.

use serde::{Deserialize, Serialize};
use socigraph_common::types::{EdgeKey, NodeId};

/// An undirected weighted connection between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(flatten)]
    key: EdgeKey,
    weight: f64,
}

impl Edge {
    /// Creates an edge. The caller is responsible for `weight >= 0`.
    #[must_use]
    pub(crate) fn new(key: EdgeKey, weight: f64) -> Self {
        Self { key, weight }
    }

    /// The undirected key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// The smaller endpoint.
    #[inline]
    #[must_use]
    pub fn u(&self) -> NodeId {
        self.key.u()
    }

    /// The larger endpoint.
    #[inline]
    #[must_use]
    pub fn v(&self) -> NodeId {
        self.key.v()
    }

    /// The weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint opposite to `id`.
    #[must_use]
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        self.key.other(id)
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}
