//! Identifier types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::Error;

/// Identifier of a node, unique within one graph.
///
/// Ids are totally ordered; ascending numeric order is the iteration order
/// every algorithm relies on for reproducible output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a node id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::InvalidParameter(format!("'{s}' is not a valid node id")))
    }
}

/// The canonical identity of an undirected edge: `(min(u, v), max(u, v))`.
///
/// Two keys built from the same endpoints in either order compare equal.
/// A key may carry equal endpoints; rejecting self-loops is the graph's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    u: NodeId,
    v: NodeId,
}

impl EdgeKey {
    /// Builds the normalized key for the pair.
    #[inline]
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn u(self) -> NodeId {
        self.u
    }

    /// The larger endpoint.
    #[inline]
    #[must_use]
    pub const fn v(self) -> NodeId {
        self.v
    }

    /// Returns true if `id` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn contains(self, id: NodeId) -> bool {
        self.u == id || self.v == id
    }

    /// Returns the endpoint opposite to `id`, or `None` if `id` is not an endpoint.
    #[must_use]
    pub fn other(self, id: NodeId) -> Option<NodeId> {
        if self.u == id {
            Some(self.v)
        } else if self.v == id {
            Some(self.u)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_normalizes_order() {
        let a = EdgeKey::new(NodeId::new(7), NodeId::new(3));
        let b = EdgeKey::new(NodeId::new(3), NodeId::new(7));
        assert_eq!(a, b);
        assert_eq!(a.u(), NodeId::new(3));
        assert_eq!(a.v(), NodeId::new(7));
    }

    #[test]
    fn test_edge_key_other() {
        let key = EdgeKey::new(NodeId::new(1), NodeId::new(2));
        assert_eq!(key.other(NodeId::new(1)), Some(NodeId::new(2)));
        assert_eq!(key.other(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(key.other(NodeId::new(9)), None);
        assert!(key.contains(NodeId::new(2)));
    }

    #[test]
    fn test_node_id_parse() {
        assert_eq!(" 42 ".parse::<NodeId>().unwrap(), NodeId::new(42));
        assert!(matches!(
            "x1".parse::<NodeId>(),
            Err(Error::InvalidParameter(_))
        ));
        assert!("-3".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_display() {
        let key = EdgeKey::new(NodeId::new(5), NodeId::new(2));
        assert_eq!(key.to_string(), "2-5");
        assert_eq!(NodeId::new(11).to_string(), "11");
    }

    #[test]
    fn test_node_id_serializes_transparently() {
        let json = serde_json::to_string(&NodeId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
