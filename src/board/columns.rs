//! Renderable columns: the grouped view joined against the user table.
//!
//! The transform works in terms of typed group keys; consumers (the
//! TUI board and the CLI listing) want display labels. For user
//! columns that means a join against the user-by-id map, with
//! placeholders when the join misses.

use std::collections::HashMap;
use std::sync::Arc;

use crate::board::BoardView;
use crate::types::{GroupKey, Ticket, User};

/// View model for a single board column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Group key this column represents
    pub key: GroupKey,
    /// Display label for the column header
    pub label: String,
    /// Number of tickets in this column
    pub ticket_count: usize,
    /// Tickets in display order
    pub tickets: Vec<Arc<Ticket>>,
}

/// Pure function: produce renderable columns from the grouped view.
///
/// Column order is the view's group order (first encounter in the
/// input). A user id with no record falls back to a placeholder, and
/// an empty id (ticket arrived without an assignee) shows as
/// "Unassigned".
pub fn build_columns(view: &BoardView, users: &HashMap<String, User>) -> Vec<ColumnViewModel> {
    view.groups
        .iter()
        .map(|group| ColumnViewModel {
            key: group.key.clone(),
            label: column_label(&group.key, users),
            ticket_count: group.tickets.len(),
            tickets: group.tickets.clone(),
        })
        .collect()
}

fn column_label(key: &GroupKey, users: &HashMap<String, User>) -> String {
    match key {
        GroupKey::User(user_id) if user_id.is_empty() => "Unassigned".to_string(),
        GroupKey::User(user_id) => match users.get(user_id) {
            Some(user) => user.name.clone(),
            None => {
                tracing::warn!(user_id = %user_id, "ticket references a user the API did not return");
                "Unknown user".to_string()
            }
        },
        key => key.to_string(),
    }
}
