//! # socigraph-engine
//!
//! The main entry point for Socigraph: a database host that owns one social
//! graph, its weight configuration, and the algorithm registry.
//!
//! ## Modules
//!
//! - [`database`] - SocialGraphDB struct and its operations
//! - [`config`] - Configuration options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod database;

pub use config::Config;
pub use database::SocialGraphDB;
