//! CLI command implementations.

pub mod adjacency;
pub mod algorithms;
pub mod centrality;
pub mod color;
pub mod components;
pub mod info;
pub mod path;
pub mod run;
pub mod traverse;
pub mod weights;
