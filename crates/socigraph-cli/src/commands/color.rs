//! Welsh-Powell coloring command.

use anyhow::Result;
use socigraph_adapters::plugins::algorithms::ColoringResult;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the color command.
pub fn run(db: &SocialGraphDB, format: OutputFormat, quiet: bool) -> Result<()> {
    print_coloring(&db.welsh_powell(), format.into(), quiet)
}

/// One row per color class.
pub fn print_coloring(result: &ColoringResult, fmt: Format, quiet: bool) -> Result<()> {
    match fmt {
        Format::Json => output::print_json(result, quiet)?,
        Format::Table => {
            let rows = result
                .classes()
                .into_iter()
                .map(|(color, members)| {
                    vec![
                        color.to_string(),
                        members.len().to_string(),
                        output::format_ids(&members),
                    ]
                })
                .collect();
            output::print_table(&["Color", "Size", "Nodes"], rows, quiet);
            output::status(&format!("{} color(s) used", result.color_count), quiet);
        }
    }
    Ok(())
}
