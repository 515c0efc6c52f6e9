//! One-shot board listing (`corkboard ls`)
//!
//! Fetches the board once, runs the same grouped-sorted transform the
//! TUI uses, and prints the result to stdout.

use owo_colors::OwoColorize;
use serde_json::json;
use url::Url;

use crate::api::ApiClient;
use crate::board::{build_columns, transform};
use crate::commands::format_ticket_line;
use crate::error::{CorkboardError, Result};
use crate::types::ViewOptions;

/// List the grouped board, optionally as JSON.
///
/// The JSON output is an ordered array of groups (group order is
/// first-encounter order, which a JSON object would not preserve).
pub async fn cmd_ls(endpoint: String, options: ViewOptions, output_json: bool) -> Result<()> {
    let url = Url::parse(&endpoint)
        .map_err(|e| CorkboardError::InvalidEndpoint(endpoint.clone(), e.to_string()))?;
    let client = ApiClient::new(url)?;
    let data = client.fetch_board().await?;

    let view = transform(&data.tickets, options);
    let columns = build_columns(&view, &data.users);

    if output_json {
        let json_groups: Vec<_> = columns
            .iter()
            .map(|column| {
                json!({
                    "key": column.label,
                    "tickets": column
                        .tickets
                        .iter()
                        .map(|ticket| ticket.as_ref())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_groups)?);
        return Ok(());
    }

    for column in &columns {
        println!("{} ({})", column.label.bold(), column.ticket_count);
        for ticket in &column.tickets {
            println!("  {}", format_ticket_line(ticket));
        }
        println!();
    }

    Ok(())
}
