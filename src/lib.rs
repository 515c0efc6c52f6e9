pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod tui;
pub mod types;
pub mod utils;

pub use api::{ApiClient, BoardData, FetchGuard, GENERIC_LOAD_ERROR, LoadState};
pub use board::{
    BoardView, ColumnViewModel, TicketGroup, TransformCache, build_columns, transform,
};
pub use config::{Config, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use error::{CorkboardError, Result};
pub use types::{
    GroupBy, GroupKey, SortBy, Ticket, TicketStatus, User, VALID_GROUPINGS, VALID_ORDERINGS,
    ViewOptions,
};
