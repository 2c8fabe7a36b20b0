//! Registered algorithm listing.

use anyhow::Result;
use serde::Serialize;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

#[derive(Serialize)]
struct ParameterOutput {
    name: &'static str,
    #[serde(rename = "type")]
    param_type: String,
    required: bool,
    description: &'static str,
}

#[derive(Serialize)]
struct AlgorithmOutput {
    name: String,
    description: String,
    parameters: Vec<ParameterOutput>,
}

/// Run the algorithms command.
pub fn run(db: &SocialGraphDB, format: OutputFormat, quiet: bool) -> Result<()> {
    let listing: Vec<AlgorithmOutput> = db
        .registry()
        .algorithms()
        .map(|algorithm| AlgorithmOutput {
            name: algorithm.name().to_string(),
            description: algorithm.description().to_string(),
            parameters: algorithm
                .parameters()
                .iter()
                .map(|def| ParameterOutput {
                    name: def.name,
                    param_type: def.param_type.to_string(),
                    required: def.required,
                    description: def.description,
                })
                .collect(),
        })
        .collect();

    match Format::from(format) {
        Format::Json => output::print_json(&listing, quiet)?,
        Format::Table => {
            let rows = listing
                .iter()
                .map(|algorithm| {
                    let params = algorithm
                        .parameters
                        .iter()
                        .map(|p| {
                            if p.required {
                                format!("{}: {}", p.name, p.param_type)
                            } else {
                                format!("[{}: {}]", p.name, p.param_type)
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    vec![algorithm.name.clone(), params, algorithm.description.clone()]
                })
                .collect();
            output::print_table(&["Name", "Parameters", "Description"], rows, quiet);
        }
    }

    Ok(())
}
