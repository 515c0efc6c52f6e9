//! Load-state container for the one-shot board fetch.
//!
//! The fetch moves through `Loading -> Ready | Failed` exactly once
//! per activation. `Ready` and `Failed` are terminal for that
//! lifetime; a manual reload starts a fresh lifetime with a fresh
//! guard rather than transitioning back.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::BoardData;
use crate::error::Result;

/// Fallback message when a failure carries no text of its own.
pub const GENERIC_LOAD_ERROR: &str = "failed to load board data";

/// Observable states of the board load.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(BoardData),
    Failed(String),
}

impl LoadState {
    /// Collapse a fetch result into the terminal state for this load.
    ///
    /// Every failure (transport, non-2xx status, malformed body)
    /// surfaces its own message; an empty message falls back to a
    /// generic one so the failure screen is never blank.
    pub fn from_result(result: Result<BoardData>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    LoadState::Failed(GENERIC_LOAD_ERROR.to_string())
                } else {
                    LoadState::Failed(message)
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded board data, if the fetch succeeded.
    pub fn board(&self) -> Option<&BoardData> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Cancellation flag scoped to one load lifetime.
///
/// The TUI cancels the guard when the component tears down (or when a
/// reload abandons the previous lifetime); a response that arrives
/// after cancellation must not be applied to state.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    cancelled: Arc<AtomicBool>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Gate a finished load on this guard's lifetime.
    ///
    /// Returns `None` when the guard was cancelled before the result
    /// arrived, in which case the caller discards it.
    pub fn admit(&self, state: LoadState) -> Option<LoadState> {
        if self.is_cancelled() {
            tracing::debug!("discarding load result that arrived after teardown");
            None
        } else {
            Some(state)
        }
    }
}
