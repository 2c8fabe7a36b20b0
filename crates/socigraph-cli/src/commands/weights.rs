//! Edge weight command.

use anyhow::Result;
use serde::Serialize;
use socigraph_core::{Edge, WeightConfig};
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

#[derive(Serialize)]
struct WeightsOutput {
    coefficients: WeightConfig,
    edges: Vec<Edge>,
}

/// Run the weights command.
pub fn run(db: &SocialGraphDB, format: OutputFormat, quiet: bool) -> Result<()> {
    let output = WeightsOutput {
        coefficients: db.weights(),
        edges: db.edges(),
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            output::status(
                &format!(
                    "Coefficients (activity, interaction, connections): {}",
                    output.coefficients
                ),
                quiet,
            );
            let rows = output
                .edges
                .iter()
                .map(|edge| {
                    vec![
                        edge.u().to_string(),
                        edge.v().to_string(),
                        output::format_score(edge.weight()),
                    ]
                })
                .collect();
            output::print_table(&["U", "V", "Weight"], rows, quiet);
        }
    }

    Ok(())
}
