//! Board data loading.
//!
//! This module owns the single network request a board session makes:
//! fetching the ticket/user snapshot from the remote API, normalizing
//! it into immutable in-memory structures, and tracking the load
//! through an explicit state machine.

pub mod client;
pub mod loader;

pub use client::{ApiClient, BoardData};
pub use loader::{FetchGuard, GENERIC_LOAD_ERROR, LoadState};
