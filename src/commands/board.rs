//! Board command (`corkboard board`)
//!
//! Launches the interactive TUI showing the remote board as columns
//! of ticket cards.

use iocraft::prelude::*;

use crate::error::{CorkboardError, Result};
use crate::tui::{Board, BoardProps};
use crate::types::ViewOptions;

/// Launch the board TUI against the resolved endpoint.
pub async fn cmd_board(endpoint: String, options: ViewOptions) -> Result<()> {
    element!(Board(endpoint: endpoint, options: options))
        .fullscreen()
        .await
        .map_err(|e| CorkboardError::Other(format!("TUI error: {e}")))
}
