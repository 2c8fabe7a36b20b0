//! Adjacency list and matrix command.

use anyhow::Result;
use socigraph_engine::SocialGraphDB;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the adjacency command.
pub fn run(db: &SocialGraphDB, matrix: bool, format: OutputFormat, quiet: bool) -> Result<()> {
    let fmt = Format::from(format);
    if matrix {
        let matrix = db.adjacency_matrix();
        match fmt {
            Format::Json => output::print_json(&matrix, quiet)?,
            Format::Table => {
                let labels: Vec<String> = matrix.ids.iter().map(ToString::to_string).collect();
                let mut headers = vec![""];
                headers.extend(labels.iter().map(String::as_str));
                let rows = labels
                    .iter()
                    .zip(&matrix.rows)
                    .map(|(label, row)| {
                        std::iter::once(label.clone())
                            .chain(row.iter().map(ToString::to_string))
                            .collect()
                    })
                    .collect();
                output::print_table(&headers, rows, quiet);
            }
        }
        return Ok(());
    }

    let list = db.adjacency_list();
    match fmt {
        Format::Json => output::print_json(&list, quiet)?,
        Format::Table => {
            let rows = list
                .iter()
                .map(|(id, neighbors)| {
                    let name = db.get_node(*id).map(|n| n.name).unwrap_or_default();
                    vec![
                        id.to_string(),
                        name,
                        neighbors.len().to_string(),
                        output::format_ids(neighbors),
                    ]
                })
                .collect();
            output::print_table(&["Node", "Name", "Degree", "Neighbors"], rows, quiet);
        }
    }

    Ok(())
}
