use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::bookmarks::core::bookmark::ToggleOutcome;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{EventId, UserId};
use chrono::Utc;
use std::sync::Arc;

pub struct ToggleBookmarkHandler {
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl ToggleBookmarkHandler {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmarks }
    }

    /// The event id must be well formed; whether the event exists is not checked.
    pub async fn handle(
        &self,
        user_id: &UserId,
        event_id: &str,
    ) -> Result<ToggleOutcome, ApplicationError> {
        let event_id: EventId = event_id.parse()?;
        let outcome = self
            .bookmarks
            .toggle(user_id, event_id, Utc::now().timestamp_millis())
            .await?;
        tracing::debug!(%user_id, %event_id, status = outcome.as_str(), "bookmark toggled");
        Ok(outcome)
    }
}
