//! Ticket card component for the board columns
//!
//! A compact card showing ticket id, title (wrapped), status line,
//! priority badge, and tags.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;
use crate::utils::{truncate_string, wrap_text_lines};

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Ticket,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact ticket card for a board column
///
/// Layout:
/// ```text
/// +-------------------+
/// | CAM-4             |
/// | Add multi-        |
/// | language support  |
/// | Status: Todo      |
/// | P3  Feature       |
/// +-------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket;

    let priority_str = format!("P{}", ticket.priority);
    let priority_color = theme.priority_color(ticket.priority);
    let status_color = theme.status_color(ticket.status);

    // Card has 1 char padding either side plus 2 border chars
    let default_width = 20u32;
    let card_width = props.width.unwrap_or(default_width);
    let text_width = (card_width.saturating_sub(4) as usize).max(8);

    // Wrap title to up to 3 lines
    let title_lines = wrap_text_lines(&ticket.title, text_width, 3);

    let tags = ticket.tag.join(", ");

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: ticket.id.clone(),
                color: theme.id_color,
                weight: Weight::Bold,
            )
            #(title_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: theme.text,
                    )
                }
            }))
            View(flex_direction: FlexDirection::Row) {
                Text(
                    content: "Status: ",
                    color: theme.text_dimmed,
                )
                Text(
                    content: ticket.status.to_string(),
                    color: status_color,
                )
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: priority_str,
                    color: priority_color,
                    weight: if ticket.priority >= 3 { Weight::Bold } else { Weight::Normal },
                )
                #(if tags.is_empty() {
                    None
                } else {
                    Some(element! {
                        Text(
                            content: truncate_string(&tags, text_width.saturating_sub(4)),
                            color: theme.tag_color,
                        )
                    })
                })
            }
        }
    }
}
