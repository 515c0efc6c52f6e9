//! Grouping and sorting of the ticket sequence.
//!
//! `transform` is a pure function: no side effects, deterministic, and
//! total over its inputs (missing fields were already bucketed to
//! sentinel values at deserialization time, so every ticket lands in
//! exactly one group).

use std::sync::Arc;

use crate::types::{GroupKey, SortBy, Ticket, ViewOptions};

/// One board column: a group key and its ordered tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketGroup {
    pub key: GroupKey,
    pub tickets: Vec<Arc<Ticket>>,
}

/// The derived result the render layer consumes.
///
/// Groups appear in first-encounter order from the input sequence (not
/// sorted); tickets within each group are ordered by the selected
/// comparator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub groups: Vec<TicketGroup>,
}

impl BoardView {
    /// Find the group for a key, if any ticket produced it.
    pub fn group(&self, key: &GroupKey) -> Option<&TicketGroup> {
        self.groups.iter().find(|g| &g.key == key)
    }

    /// Total tickets across all groups.
    ///
    /// Equals the input count: grouping partitions the sequence, it
    /// never drops or duplicates a ticket.
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(|g| g.tickets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group the ticket sequence and sort within each group.
///
/// One pass over the input in original order; a group is created the
/// first time its key is seen, so key order reflects first occurrence.
/// The input sequence is never mutated; each group's ordering is a new
/// sequence.
pub fn transform(tickets: &[Arc<Ticket>], options: ViewOptions) -> BoardView {
    let mut groups: Vec<TicketGroup> = Vec::new();

    for ticket in tickets {
        let key = GroupKey::for_ticket(ticket, options.group_by);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.tickets.push(Arc::clone(ticket)),
            None => groups.push(TicketGroup {
                key,
                tickets: vec![Arc::clone(ticket)],
            }),
        }
    }

    for group in &mut groups {
        sort_group(&mut group.tickets, options.sort_by);
    }

    BoardView { groups }
}

/// Order one group's tickets.
///
/// The sort is stable: tickets comparing equal keep their relative
/// input order.
fn sort_group(tickets: &mut [Arc<Ticket>], sort_by: SortBy) {
    match sort_by {
        // Higher priority value first
        SortBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        // Alphabetical by title
        SortBy::Title => tickets.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupBy, TicketStatus};

    fn make_ticket(id: &str, title: &str, status: TicketStatus, priority: u8) -> Arc<Ticket> {
        Arc::new(Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status,
            priority,
            user_id: "usr-1".to_string(),
            tag: vec![],
        })
    }

    #[test]
    fn test_groups_follow_first_encounter_order() {
        let tickets = vec![
            make_ticket("1", "a", TicketStatus::Done, 1),
            make_ticket("2", "b", TicketStatus::Backlog, 1),
            make_ticket("3", "c", TicketStatus::Done, 1),
            make_ticket("4", "d", TicketStatus::Todo, 1),
        ];
        let view = transform(&tickets, ViewOptions::default());

        let keys: Vec<_> = view.groups.iter().map(|g| g.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Status(TicketStatus::Done),
                GroupKey::Status(TicketStatus::Backlog),
                GroupKey::Status(TicketStatus::Todo),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_view() {
        let view = transform(&[], ViewOptions::default());
        assert!(view.is_empty());
        assert_eq!(view.ticket_count(), 0);
    }

    #[test]
    fn test_priority_sort_is_descending() {
        let tickets = vec![
            make_ticket("1", "a", TicketStatus::Todo, 2),
            make_ticket("2", "b", TicketStatus::Todo, 5),
            make_ticket("3", "c", TicketStatus::Todo, 3),
        ];
        let view = transform(&tickets, ViewOptions::default());
        let ids: Vec<_> = view.groups[0].tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_priority_ties_keep_input_order() {
        let tickets = vec![
            make_ticket("1", "a", TicketStatus::Todo, 3),
            make_ticket("2", "b", TicketStatus::Todo, 3),
            make_ticket("3", "c", TicketStatus::Todo, 3),
        ];
        let view = transform(&tickets, ViewOptions::default());
        let ids: Vec<_> = view.groups[0].tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_title_sort_is_ascending() {
        let tickets = vec![
            make_ticket("1", "Sync issues", TicketStatus::Todo, 1),
            make_ticket("2", "Add filters", TicketStatus::Todo, 1),
            make_ticket("3", "Fix crash", TicketStatus::Todo, 1),
        ];
        let options = ViewOptions::default().toggle_sort_by();
        let view = transform(&tickets, options);
        let titles: Vec<_> = view.groups[0]
            .tickets
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Add filters", "Fix crash", "Sync issues"]);
    }

    #[test]
    fn test_group_by_priority_uses_numeric_keys() {
        let tickets = vec![
            make_ticket("1", "a", TicketStatus::Todo, 4),
            make_ticket("2", "b", TicketStatus::Done, 0),
            make_ticket("3", "c", TicketStatus::Backlog, 4),
        ];
        let options = ViewOptions::new(GroupBy::Priority, Default::default());
        let view = transform(&tickets, options);

        assert_eq!(view.groups.len(), 2);
        let p4 = view.group(&GroupKey::Priority(4)).unwrap();
        assert_eq!(p4.tickets.len(), 2);
        let p0 = view.group(&GroupKey::Priority(0)).unwrap();
        assert_eq!(p0.tickets.len(), 1);
    }

    #[test]
    fn test_input_sequence_is_untouched() {
        let tickets = vec![
            make_ticket("1", "z", TicketStatus::Todo, 1),
            make_ticket("2", "a", TicketStatus::Todo, 5),
        ];
        let _ = transform(&tickets, ViewOptions::default());
        // Original order survives the sort within the group
        assert_eq!(tickets[0].id, "1");
        assert_eq!(tickets[1].id, "2");
    }
}
