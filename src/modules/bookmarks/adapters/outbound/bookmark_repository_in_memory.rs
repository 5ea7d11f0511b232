// In memory implementation of the BookmarkRepository port.
//
// Responsibilities
// - Key bookmarks by (user_id, event_id) so the pair is unique.
// - Hold the write lock across the whole check-then-act of a toggle.

use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::bookmarks::core::bookmark::{Bookmark, ToggleOutcome};
use crate::shared::core::primitives::{EventId, UserId};
use crate::shared::infrastructure::document_store::StoreError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: RwLock<HashMap<(UserId, EventId), Bookmark>>,
    is_offline: bool,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Bookmark repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn toggle(
        &self,
        user_id: &UserId,
        event_id: EventId,
        bookmarked_at: i64,
    ) -> Result<ToggleOutcome, StoreError> {
        self.check_online()?;
        let mut guard = self.bookmarks.write().await;
        match guard.entry((user_id.clone(), event_id)) {
            Entry::Occupied(entry) => {
                entry.remove();
                Ok(ToggleOutcome::Unbookmarked)
            }
            Entry::Vacant(entry) => {
                entry.insert(Bookmark {
                    user_id: user_id.clone(),
                    event_id,
                    bookmarked_at,
                });
                Ok(ToggleOutcome::Bookmarked)
            }
        }
    }

    async fn find(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<Option<Bookmark>, StoreError> {
        self.check_online()?;
        Ok(self
            .bookmarks
            .read()
            .await
            .get(&(user_id.clone(), event_id))
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, StoreError> {
        self.check_online()?;
        let mut bookmarks: Vec<Bookmark> = self
            .bookmarks
            .read()
            .await
            .values()
            .filter(|bookmark| &bookmark.user_id == user_id)
            .cloned()
            .collect();
        bookmarks.sort_by_key(|bookmark| bookmark.bookmarked_at);
        Ok(bookmarks)
    }
}
