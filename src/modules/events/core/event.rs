use crate::shared::core::primitives::EventId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// ISO 8601 calendar date, kept as submitted.
    pub date: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

/// An event before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

impl NewEvent {
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            location: self.location,
            description: self.description,
            category: self.category,
        }
    }
}

/// Orders events by date ascending. Equal dates keep their relative order.
pub fn sort_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}
