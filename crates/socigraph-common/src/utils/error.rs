//! Error types for Socigraph.
//!
//! Every graph mutation and lookup failure is reported synchronously through
//! [`Error`]. Removing something that is already gone is not an error, and
//! neither is an unreachable goal in a path search.

use std::fmt;

use thiserror::Error;

use crate::types::{EdgeKey, NodeId};

/// Result type alias for Socigraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What a [`Error::NotFound`] failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A node id.
    Node(NodeId),
    /// An undirected edge.
    Edge(EdgeKey),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Node(id) => write!(f, "node {id}"),
            Entity::Edge(key) => write!(f, "edge {key}"),
        }
    }
}

/// The error taxonomy shared by every Socigraph crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A node with this id already exists.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// The node or edge does not exist.
    #[error("{0} not found")]
    NotFound(Entity),

    /// Both endpoints of an edge are the same node.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    /// One endpoint of a new edge does not exist.
    #[error("edge endpoint {0} does not exist")]
    MissingEndpoint(NodeId),

    /// An edge between the two nodes already exists.
    #[error("duplicate edge: {0}")]
    DuplicateEdge(EdgeKey),

    /// Non-numeric or out-of-range input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Shorthand for a missing node.
    #[must_use]
    pub fn node_not_found(id: NodeId) -> Self {
        Error::NotFound(Entity::Node(id))
    }

    /// Shorthand for a missing edge.
    #[must_use]
    pub fn edge_not_found(key: EdgeKey) -> Self {
        Error::NotFound(Entity::Edge(key))
    }

    /// Returns true for [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
