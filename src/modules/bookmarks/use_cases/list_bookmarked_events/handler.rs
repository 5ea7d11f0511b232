use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{EventId, UserId};
use std::sync::Arc;

/// Resolves a user's bookmarks to events. Bookmarks whose event no longer
/// exists are dropped without error.
pub struct ListBookmarkedEventsHandler {
    bookmarks: Arc<dyn BookmarkRepository>,
    events: Arc<dyn EventRepository>,
}

impl ListBookmarkedEventsHandler {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { bookmarks, events }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<Event>, ApplicationError> {
        let ids: Vec<EventId> = self
            .bookmarks
            .list_by_user(user_id)
            .await?
            .into_iter()
            .map(|bookmark| bookmark.event_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.events.find_by_ids(&ids).await?)
    }
}
