//! Reusable TUI components

pub mod empty_state;
pub mod footer;
pub mod ticket_card;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut, board_shortcuts, failed_shortcuts};
pub use ticket_card::{TicketCard, TicketCardProps};
