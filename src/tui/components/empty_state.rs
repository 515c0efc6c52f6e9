//! Empty state component
//!
//! Full-screen panels for the loading, failed, and no-ticket states.
//! The failure panel replaces the normal board view entirely: a failed
//! load is terminal for the session, there is no automatic retry.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The board request is still in flight
    #[default]
    Loading,
    /// The board request failed (transport error or non-2xx status)
    LoadFailed,
    /// The request succeeded but the board has no tickets
    NoTickets,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Failure message (for LoadFailed)
    pub message: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Loading board...".to_string(), ""),
        EmptyStateKind::LoadFailed => (
            "!",
            "Load Failed",
            props
                .message
                .clone()
                .unwrap_or_else(|| "The board could not be loaded.".to_string()),
            "Press 'r' to reload, or 'q' to quit.",
        ),
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "The board is empty.".to_string(),
            "Press 'q' to quit.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if props.kind == EmptyStateKind::LoadFailed {
                    theme.error
                } else {
                    theme.border
                },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if props.kind == EmptyStateKind::LoadFailed {
                        theme.error
                    } else {
                        theme.text_dimmed
                    },
                    weight: Weight::Bold,
                )
            }

            // Title
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            // Message
            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: if props.kind == EmptyStateKind::LoadFailed {
                        theme.error
                    } else {
                        theme.text_dimmed
                    },
                )
            }

            // Hint
            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
