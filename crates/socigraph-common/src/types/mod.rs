//! Core type definitions for Socigraph.
//!
//! - Node identifiers ([`NodeId`])
//! - Canonical undirected edge identity ([`EdgeKey`])

mod id;

pub use id::{EdgeKey, NodeId};
