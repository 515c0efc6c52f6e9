//! TUI module for the interactive board view

pub mod board;
pub mod components;
pub mod theme;

pub use board::{Board, BoardProps};
pub use theme::Theme;
