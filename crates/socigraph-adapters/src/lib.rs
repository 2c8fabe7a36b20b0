//! # socigraph-adapters
//!
//! Adapters layer for Socigraph: the graph algorithm suite and the plugin
//! registry that exposes it by name.
//!
//! ## Modules
//!
//! - [`plugins`] - Plugin system and the built-in algorithms

#![warn(missing_docs)]

pub mod plugins;
