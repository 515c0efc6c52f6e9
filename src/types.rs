use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CorkboardError;

/// Workflow status labels as the ticket API reports them.
///
/// The wire format uses free-form display strings ("In progress" has a
/// space); anything outside the known set buckets under `Unknown` so a
/// ticket is never dropped for carrying a status this build has not
/// seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    Backlog,
    Todo,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Backlog => write!(f, "Backlog"),
            TicketStatus::Todo => write!(f, "Todo"),
            TicketStatus::InProgress => write!(f, "In progress"),
            TicketStatus::Done => write!(f, "Done"),
            TicketStatus::Cancelled => write!(f, "Cancelled"),
            TicketStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A single work item from the remote board API.
///
/// Tickets are immutable once loaded; the view transform only ever
/// holds references to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub status: TicketStatus,

    #[serde(default)]
    pub priority: u8,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub tag: Vec<String>,
}

/// A user record from the board API, looked up by id when grouping by
/// assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub avatar: String,
}

/// Grouping axis for the board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupBy {
    /// Advance to the next grouping axis, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            GroupBy::Status => GroupBy::User,
            GroupBy::User => GroupBy::Priority,
            GroupBy::Priority => GroupBy::Status,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::Status => write!(f, "status"),
            GroupBy::User => write!(f, "user"),
            GroupBy::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for GroupBy {
    type Err = CorkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupBy::Status),
            "user" => Ok(GroupBy::User),
            "priority" => Ok(GroupBy::Priority),
            _ => Err(CorkboardError::InvalidGroupBy(s.to_string())),
        }
    }
}

pub const VALID_GROUPINGS: &[&str] = &["status", "user", "priority"];

/// Ordering applied within each board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Priority,
    Title,
}

impl SortBy {
    /// Flip between the two orderings.
    pub fn toggle(self) -> Self {
        match self {
            SortBy::Priority => SortBy::Title,
            SortBy::Title => SortBy::Priority,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Priority => write!(f, "priority"),
            SortBy::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortBy {
    type Err = CorkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortBy::Priority),
            "title" => Ok(SortBy::Title),
            _ => Err(CorkboardError::InvalidSortBy(s.to_string())),
        }
    }
}

pub const VALID_ORDERINGS: &[&str] = &["priority", "title"];

/// The two user-selected display options, combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewOptions {
    pub group_by: GroupBy,
    pub sort_by: SortBy,
}

impl ViewOptions {
    pub fn new(group_by: GroupBy, sort_by: SortBy) -> Self {
        Self { group_by, sort_by }
    }

    pub fn cycle_group_by(self) -> Self {
        Self {
            group_by: self.group_by.cycle(),
            ..self
        }
    }

    pub fn toggle_sort_by(self) -> Self {
        Self {
            sort_by: self.sort_by.toggle(),
            ..self
        }
    }
}

/// Key identifying one board column, typed by the grouping axis that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Status(TicketStatus),
    User(String),
    Priority(u8),
}

impl GroupKey {
    /// Compute the column a ticket belongs to under the given axis.
    pub fn for_ticket(ticket: &Ticket, group_by: GroupBy) -> Self {
        match group_by {
            GroupBy::Status => GroupKey::Status(ticket.status),
            GroupBy::User => GroupKey::User(ticket.user_id.clone()),
            GroupBy::Priority => GroupKey::Priority(ticket.priority),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Status(status) => write!(f, "{}", status),
            GroupKey::User(user_id) => write!(f, "{}", user_id),
            GroupKey::Priority(priority) => write!(f, "Priority {}", priority),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        let status: TicketStatus = serde_json::from_str("\"In progress\"").unwrap();
        assert_eq!(status, TicketStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"In progress\""
        );

        let status: TicketStatus = serde_json::from_str("\"Backlog\"").unwrap();
        assert_eq!(status, TicketStatus::Backlog);
    }

    #[test]
    fn test_status_unknown_fallback() {
        let status: TicketStatus = serde_json::from_str("\"Iceboxed\"").unwrap();
        assert_eq!(status, TicketStatus::Unknown);
    }

    #[test]
    fn test_ticket_deserializes_wire_shape() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update user profile page UI",
            "tag": ["Feature Request"],
            "userId": "usr-1",
            "status": "Todo",
            "priority": 4
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.status, TicketStatus::Todo);
        assert_eq!(ticket.priority, 4);
        assert_eq!(ticket.user_id, "usr-1");
        assert_eq!(ticket.tag, vec!["Feature Request".to_string()]);
    }

    #[test]
    fn test_ticket_missing_fields_take_sentinels() {
        let json = r#"{"id": "CAM-2", "title": "Orphaned"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::Unknown);
        assert_eq!(ticket.priority, 0);
        assert_eq!(ticket.user_id, "");
        assert!(ticket.tag.is_empty());
    }

    #[test]
    fn test_group_by_from_str() {
        assert_eq!("status".parse::<GroupBy>().unwrap(), GroupBy::Status);
        assert_eq!("User".parse::<GroupBy>().unwrap(), GroupBy::User);
        assert_eq!("priority".parse::<GroupBy>().unwrap(), GroupBy::Priority);
        assert!("assignee".parse::<GroupBy>().is_err());
    }

    #[test]
    fn test_sort_by_from_str() {
        assert_eq!("priority".parse::<SortBy>().unwrap(), SortBy::Priority);
        assert_eq!("Title".parse::<SortBy>().unwrap(), SortBy::Title);
        assert!("severity".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_group_by_cycle_covers_all_axes() {
        let mut axis = GroupBy::Status;
        let mut seen = vec![axis];
        for _ in 0..2 {
            axis = axis.cycle();
            seen.push(axis);
        }
        assert_eq!(seen, vec![GroupBy::Status, GroupBy::User, GroupBy::Priority]);
        assert_eq!(axis.cycle(), GroupBy::Status);
    }

    #[test]
    fn test_sort_by_toggle_round_trips() {
        assert_eq!(SortBy::Priority.toggle(), SortBy::Title);
        assert_eq!(SortBy::Title.toggle(), SortBy::Priority);
    }

    #[test]
    fn test_view_options_defaults() {
        let options = ViewOptions::default();
        assert_eq!(options.group_by, GroupBy::Status);
        assert_eq!(options.sort_by, SortBy::Priority);
    }

    #[test]
    fn test_group_key_for_ticket() {
        let ticket = Ticket {
            id: "CAM-3".to_string(),
            title: "Test".to_string(),
            status: TicketStatus::Todo,
            priority: 3,
            user_id: "usr-9".to_string(),
            tag: vec![],
        };
        assert_eq!(
            GroupKey::for_ticket(&ticket, GroupBy::Status),
            GroupKey::Status(TicketStatus::Todo)
        );
        assert_eq!(
            GroupKey::for_ticket(&ticket, GroupBy::User),
            GroupKey::User("usr-9".to_string())
        );
        assert_eq!(
            GroupKey::for_ticket(&ticket, GroupBy::Priority),
            GroupKey::Priority(3)
        );
    }

    #[test]
    fn test_group_key_display() {
        assert_eq!(GroupKey::Status(TicketStatus::InProgress).to_string(), "In progress");
        assert_eq!(GroupKey::User("usr-2".to_string()).to_string(), "usr-2");
        assert_eq!(GroupKey::Priority(4).to_string(), "Priority 4");
    }
}
