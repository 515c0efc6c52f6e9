//! Mock data builders for creating test tickets and users.
//!
//! Builder patterns for test data so tests never depend on the remote
//! endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use corkboard::types::{Ticket, TicketStatus, User};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Ticket {}", id),
                status: TicketStatus::Todo,
                priority: 2,
                user_id: "usr-1".to_string(),
                tag: vec![],
            },
        }
    }

    /// Set the ticket title
    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    /// Set the ticket status
    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    /// Set the ticket priority
    pub fn priority(mut self, priority: u8) -> Self {
        self.ticket.priority = priority;
        self
    }

    /// Set the owning user id
    pub fn user(mut self, user_id: &str) -> Self {
        self.ticket.user_id = user_id.to_string();
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.ticket.tag.push(tag.to_string());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        self.ticket
    }

    /// Build the ticket behind an Arc, as the loader stores them
    pub fn build_arc(self) -> Arc<Ticket> {
        Arc::new(self.ticket)
    }
}

/// Wrap built tickets the way a successful load does.
pub fn snapshot(tickets: Vec<Arc<Ticket>>) -> Arc<Vec<Arc<Ticket>>> {
    Arc::new(tickets)
}

/// A small user table matching the builders' default user ids.
pub fn mock_users() -> HashMap<String, User> {
    let mut users = HashMap::new();
    for (id, name) in [
        ("usr-1", "Anoop sharma"),
        ("usr-2", "Yogesh"),
        ("usr-3", "Shankar Kumar"),
    ] {
        users.insert(
            id.to_string(),
            User {
                id: id.to_string(),
                name: name.to_string(),
                avatar: String::new(),
            },
        );
    }
    users
}
