// Port for the events collection.
//
// Purpose
// - Keep handlers independent of the document store in use.
//
// Boundaries
// - Ids are assigned by the implementation on insert.
// - There is no update or delete: events are immutable once stored.

use crate::modules::events::core::event::{Event, NewEvent};
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::document_store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError>;

    async fn insert_many(&self, events: Vec<NewEvent>) -> Result<Vec<Event>, StoreError>;

    /// All events, date ascending.
    async fn list_by_date(&self) -> Result<Vec<Event>, StoreError>;

    /// Events whose id is in `ids`, date ascending. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[EventId]) -> Result<Vec<Event>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}
