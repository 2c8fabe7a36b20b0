//! # socigraph-common
//!
//! Foundation layer for Socigraph: identifiers, the error taxonomy, and small
//! utilities.
//!
//! This crate provides the building blocks used by all other Socigraph crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (NodeId, EdgeKey)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeKey, NodeId};
pub use utils::error::{Entity, Error, Result};
