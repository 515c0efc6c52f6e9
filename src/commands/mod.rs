//! CLI command implementations

mod board;
mod ls;

pub use board::cmd_board;
pub use ls::cmd_ls;

use owo_colors::OwoColorize;

use crate::types::{Ticket, TicketStatus};

/// Format a ticket for single-line display
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id_padded = format!("{:8}", ticket.id);
    let priority_str = format!("[P{}]", ticket.priority);
    let status_str = format!("[{}]", ticket.status);

    // Apply colors based on status
    let colored_status = match ticket.status {
        TicketStatus::Backlog => status_str.dimmed().to_string(),
        TicketStatus::Todo => status_str.yellow().to_string(),
        TicketStatus::InProgress => status_str.cyan().to_string(),
        TicketStatus::Done => status_str.green().to_string(),
        TicketStatus::Cancelled => status_str.dimmed().to_string(),
        TicketStatus::Unknown => status_str.magenta().to_string(),
    };

    let colored_id = id_padded.cyan().to_string();

    // Color priority for the urgent tiers
    let colored_priority = match ticket.priority {
        4 => priority_str.red().to_string(),
        3 => priority_str.yellow().to_string(),
        _ => priority_str,
    };

    let tags = if ticket.tag.is_empty() {
        String::new()
    } else {
        format!("  ({})", ticket.tag.join(", "))
    };

    format!(
        "{} {}{} - {}{}",
        colored_id, colored_priority, colored_status, ticket.title, tags
    )
}
