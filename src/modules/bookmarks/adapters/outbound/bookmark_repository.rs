// Port for the bookmarks collection.
//
// Invariant
// - At most one bookmark exists per (user_id, event_id). Implementations must
//   make `toggle` atomic with respect to concurrent toggles on the same pair.

use crate::modules::bookmarks::core::bookmark::{Bookmark, ToggleOutcome};
use crate::shared::core::primitives::{EventId, UserId};
use crate::shared::infrastructure::document_store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Deletes the bookmark for the pair if present, otherwise inserts one.
    async fn toggle(
        &self,
        user_id: &UserId,
        event_id: EventId,
        bookmarked_at: i64,
    ) -> Result<ToggleOutcome, StoreError>;

    async fn find(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<Option<Bookmark>, StoreError>;

    /// Oldest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, StoreError>;
}
