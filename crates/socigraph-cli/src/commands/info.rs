//! Graph statistics command.

use anyhow::Result;
use serde::Serialize;
use socigraph_core::{GraphStatistics, WeightConfig};
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Statistics plus the coefficients the weights were computed with.
#[derive(Serialize)]
struct InfoOutput {
    #[serde(flatten)]
    statistics: GraphStatistics,
    weights: WeightConfig,
}

fn optional_score(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), output::format_score)
}

/// Run the info command.
pub fn run(db: &SocialGraphDB, format: OutputFormat, quiet: bool) -> Result<()> {
    let output = InfoOutput {
        statistics: db.statistics(),
        weights: db.weights(),
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let stats = &output.statistics;
            let items = vec![
                ("Nodes", stats.node_count.to_string()),
                ("Edges", stats.edge_count.to_string()),
                ("Density", output::format_score(stats.density)),
                ("Min Degree", stats.degree.min.to_string()),
                ("Max Degree", stats.degree.max.to_string()),
                ("Mean Degree", output::format_score(stats.degree.mean)),
                ("Isolated Nodes", stats.degree.isolated.to_string()),
                ("Total Weight", output::format_score(stats.weight.total)),
                ("Min Weight", optional_score(stats.weight.min)),
                ("Max Weight", optional_score(stats.weight.max)),
                ("Mean Weight", optional_score(stats.weight.mean)),
                ("Coefficients", output.weights.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
