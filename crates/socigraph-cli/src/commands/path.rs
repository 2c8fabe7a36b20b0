//! Dijkstra and A* commands.

use anyhow::{Context, Result};
use socigraph_adapters::plugins::algorithms::{Heuristic, ShortestPathResult};
use socigraph_common::types::NodeId;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run Dijkstra from `start`, optionally stopping at `goal`.
pub fn dijkstra(
    db: &SocialGraphDB,
    start: NodeId,
    goal: Option<NodeId>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = db
        .dijkstra(start, goal)
        .with_context(|| format!("Dijkstra from {start} failed"))?;
    print_shortest_path(&result, format.into(), quiet)
}

/// Run A* from `start` to `goal`.
pub fn astar(
    db: &SocialGraphDB,
    start: NodeId,
    goal: NodeId,
    heuristic: Option<Heuristic>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = db
        .astar(start, goal, heuristic)
        .with_context(|| format!("A* from {start} to {goal} failed"))?;
    print_shortest_path(&result, format.into(), quiet)
}

/// The path summary when a target was given, otherwise the distance table.
pub fn print_shortest_path(result: &ShortestPathResult, fmt: Format, quiet: bool) -> Result<()> {
    if let Format::Json = fmt {
        return output::print_json(result, quiet);
    }

    match result.target {
        Some(target) => {
            let items = vec![
                ("Source", result.source.to_string()),
                ("Target", target.to_string()),
                ("Path", output::format_path(&result.path)),
                ("Hops", result.path.len().saturating_sub(1).to_string()),
                (
                    "Cost",
                    result
                        .cost
                        .map_or_else(|| "unreachable".to_string(), output::format_score),
                ),
                ("Settled Nodes", result.distances.len().to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
        None => {
            let rows = result
                .distances
                .iter()
                .map(|(id, distance)| {
                    let parent = result.predecessors.get(id).copied().flatten();
                    vec![
                        id.to_string(),
                        output::format_score(*distance),
                        output::format_predecessor(parent),
                    ]
                })
                .collect();
            output::print_table(&["Node", "Distance", "Via"], rows, quiet);
        }
    }
    Ok(())
}
