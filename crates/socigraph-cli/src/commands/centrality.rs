//! Degree and closeness centrality command.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use socigraph_adapters::plugins::algorithms::CentralityResult;
use socigraph_common::types::NodeId;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the centrality command.
pub fn run(db: &SocialGraphDB, top: Option<usize>, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut result = db.centrality().context("centrality failed")?;
    if let Some(k) = top {
        let keep: BTreeSet<NodeId> = result.top_by_degree(k).into_iter().map(|(id, _)| id).collect();
        result.degree.retain(|id, _| keep.contains(id));
        result.normalized_degree.retain(|id, _| keep.contains(id));
        result.closeness.retain(|id, _| keep.contains(id));
    }
    print_centrality(&result, format.into(), quiet)
}

/// Nodes ranked by degree, ties by ascending id. Closeness shows `N/A` when
/// it was not computed.
pub fn print_centrality(result: &CentralityResult, fmt: Format, quiet: bool) -> Result<()> {
    match fmt {
        Format::Json => output::print_json(result, quiet)?,
        Format::Table => {
            let rows = result
                .top_by_degree(result.degree.len())
                .into_iter()
                .map(|(id, degree)| {
                    let score = |map: &BTreeMap<NodeId, f64>| {
                        map.get(&id)
                            .map_or_else(|| "N/A".to_string(), |v| output::format_score(*v))
                    };
                    vec![
                        id.to_string(),
                        degree.to_string(),
                        score(&result.normalized_degree),
                        score(&result.closeness),
                    ]
                })
                .collect();
            output::print_table(&["Node", "Degree", "Normalized", "Closeness"], rows, quiet);
        }
    }
    Ok(())
}
