use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::{Event, NewEvent};
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct AddEventHandler {
    events: Arc<dyn EventRepository>,
}

impl AddEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Fields are stored as submitted.
    pub async fn handle(&self, command: NewEvent) -> Result<Event, ApplicationError> {
        let event = self.events.insert(command).await?;
        tracing::info!(event_id = %event.id, name = %event.name, "event added");
        Ok(event)
    }
}
