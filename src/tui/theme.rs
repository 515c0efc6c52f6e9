//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output
//! (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::TicketStatus;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with the CLI list output)
    pub status_backlog: Color,
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_cancelled: Color,
    pub status_unknown: Color,

    // Priority colors
    pub priority_urgent: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub error: Color,
    pub id_color: Color,
    pub tag_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_backlog: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_cancelled: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            status_unknown: Color::Magenta,

            priority_urgent: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            error: Color::Red,
            id_color: Color::Cyan,
            tag_color: Color::Blue,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Backlog => self.status_backlog,
            TicketStatus::Todo => self.status_todo,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Done => self.status_done,
            TicketStatus::Cancelled => self.status_cancelled,
            TicketStatus::Unknown => self.status_unknown,
        }
    }

    /// Get the color for a numeric ticket priority
    pub fn priority_color(&self, priority: u8) -> Color {
        match priority {
            4 => self.priority_urgent,
            3 => self.priority_high,
            _ => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
