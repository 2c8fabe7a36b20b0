//! Connected components command.

use anyhow::Result;
use socigraph_adapters::plugins::algorithms::ComponentsResult;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the components command.
pub fn run(db: &SocialGraphDB, format: OutputFormat, quiet: bool) -> Result<()> {
    print_components(&db.connected_components(), format.into(), quiet)
}

/// One row per component, in discovery order.
pub fn print_components(result: &ComponentsResult, fmt: Format, quiet: bool) -> Result<()> {
    match fmt {
        Format::Json => output::print_json(result, quiet)?,
        Format::Table => {
            let rows = result
                .components
                .iter()
                .enumerate()
                .map(|(i, members)| {
                    vec![
                        i.to_string(),
                        members.len().to_string(),
                        output::format_ids(members),
                    ]
                })
                .collect();
            output::print_table(&["Component", "Size", "Members"], rows, quiet);
            output::status(&format!("{} component(s)", result.count), quiet);
        }
    }
    Ok(())
}
