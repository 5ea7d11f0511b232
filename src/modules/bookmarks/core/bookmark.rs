use crate::shared::core::primitives::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// Association between a visitor and an event. `event_id` is a weak reference:
/// the event may no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub user_id: UserId,
    pub event_id: EventId,
    pub bookmarked_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Bookmarked,
    Unbookmarked,
}

impl ToggleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleOutcome::Bookmarked => "bookmarked",
            ToggleOutcome::Unbookmarked => "unbookmarked",
        }
    }
}
