//! BFS, DFS, and BFS layer commands.

use anyhow::{Context, Result};
use socigraph_adapters::plugins::algorithms::{LayersResult, TraversalResult};
use socigraph_common::types::NodeId;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Which traversal to run.
#[derive(Clone, Copy, Debug)]
pub enum TraversalKind {
    Bfs,
    Dfs,
    Layers,
}

/// Run a traversal from `start`.
pub fn run(
    db: &SocialGraphDB,
    kind: TraversalKind,
    start: NodeId,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let fmt = Format::from(format);
    match kind {
        TraversalKind::Bfs => {
            let result = db.bfs(start).with_context(|| format!("BFS from {start} failed"))?;
            print_traversal(&result, fmt, quiet)
        }
        TraversalKind::Dfs => {
            let result = db.dfs(start).with_context(|| format!("DFS from {start} failed"))?;
            print_traversal(&result, fmt, quiet)
        }
        TraversalKind::Layers => {
            let result = db
                .bfs_layers(start)
                .with_context(|| format!("BFS layering from {start} failed"))?;
            print_layers(&result, fmt, quiet)
        }
    }
}

/// Visit order with each node's tree parent.
pub fn print_traversal(result: &TraversalResult, fmt: Format, quiet: bool) -> Result<()> {
    match fmt {
        Format::Json => output::print_json(result, quiet)?,
        Format::Table => {
            let rows = result
                .order
                .iter()
                .enumerate()
                .map(|(step, id)| {
                    let parent = result.predecessors.get(id).copied().flatten();
                    vec![
                        (step + 1).to_string(),
                        id.to_string(),
                        output::format_predecessor(parent),
                    ]
                })
                .collect();
            output::print_table(&["Step", "Node", "Parent"], rows, quiet);
            output::status(
                &format!("Visited {} node(s) from {}", result.order.len(), result.start),
                quiet,
            );
        }
    }
    Ok(())
}

/// One row per hop distance.
pub fn print_layers(result: &LayersResult, fmt: Format, quiet: bool) -> Result<()> {
    match fmt {
        Format::Json => output::print_json(result, quiet)?,
        Format::Table => {
            let rows = result
                .layers
                .iter()
                .enumerate()
                .map(|(hop, layer)| vec![hop.to_string(), output::format_ids(layer)])
                .collect();
            output::print_table(&["Hops", "Nodes"], rows, quiet);
        }
    }
    Ok(())
}
