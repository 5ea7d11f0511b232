// In memory implementation of the EventRepository port.
//
// Purpose
// - Default store for local development and the backing store for tests.

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::{Event, NewEvent, sort_by_date};
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::document_store::StoreError;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Removes an event behind the application's back. Bookmarks pointing at it
    /// are left dangling.
    pub async fn remove(&self, id: EventId) -> bool {
        let mut guard = self.events.write().await;
        let before = guard.len();
        guard.retain(|event| event.id != id);
        guard.len() != before
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Event repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        self.check_online()?;
        let event = event.into_event(EventId::generate());
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn insert_many(&self, events: Vec<NewEvent>) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        let events: Vec<Event> = events
            .into_iter()
            .map(|event| event.into_event(EventId::generate()))
            .collect();
        self.events.write().await.extend(events.iter().cloned());
        Ok(events)
    }

    async fn list_by_date(&self) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        let mut events = self.events.read().await.clone();
        sort_by_date(&mut events);
        Ok(events)
    }

    async fn find_by_ids(&self, ids: &[EventId]) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        let wanted: HashSet<&EventId> = ids.iter().collect();
        let mut events: Vec<Event> = self
            .events
            .read()
            .await
            .iter()
            .filter(|event| wanted.contains(&event.id))
            .cloned()
            .collect();
        sort_by_date(&mut events);
        Ok(events)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check_online()?;
        Ok(self.events.read().await.len() as u64)
    }
}
