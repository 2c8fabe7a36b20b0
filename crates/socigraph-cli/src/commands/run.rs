//! Registry dispatch command.

use anyhow::{Context, Result};
use socigraph_adapters::plugins::{AlgorithmResult, Parameters};
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::commands::{centrality, color, components, path, traverse};
use crate::output::{self, Format};

/// Run a registered algorithm with `KEY=VALUE` parameters.
pub fn run(
    db: &SocialGraphDB,
    name: &str,
    assignments: &[String],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let params = Parameters::from_assignments(assignments)
        .with_context(|| format!("bad parameters for '{name}'"))?;
    let result = db
        .run(name, &params)
        .with_context(|| format!("algorithm '{name}' failed"))?;

    let fmt = Format::from(format);
    if let Format::Json = fmt {
        return output::print_json(&result, quiet);
    }
    match &result {
        AlgorithmResult::Traversal(r) => traverse::print_traversal(r, fmt, quiet),
        AlgorithmResult::Layers(r) => traverse::print_layers(r, fmt, quiet),
        AlgorithmResult::ShortestPath(r) => path::print_shortest_path(r, fmt, quiet),
        AlgorithmResult::Components(r) => components::print_components(r, fmt, quiet),
        AlgorithmResult::Centrality(r) => centrality::print_centrality(r, fmt, quiet),
        AlgorithmResult::Coloring(r) => color::print_coloring(r, fmt, quiet),
    }
}
