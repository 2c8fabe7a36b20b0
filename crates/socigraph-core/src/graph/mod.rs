//! Graph model implementations.
//!
//! - [`social`] - Undirected weighted graph of social nodes

pub mod social;
