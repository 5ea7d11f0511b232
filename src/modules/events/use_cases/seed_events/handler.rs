use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::samples::sample_events;
use crate::shared::infrastructure::document_store::StoreError;

/// Inserts the sample events when the collection is empty. Any existing
/// document suppresses seeding. Returns whether anything was inserted.
pub async fn seed_sample_events(events: &dyn EventRepository) -> Result<bool, StoreError> {
    if events.count().await? > 0 {
        tracing::debug!("events collection not empty, skipping sample data");
        return Ok(false);
    }
    let inserted = events.insert_many(sample_events()).await?;
    tracing::info!(count = inserted.len(), "sample data added to database");
    Ok(true)
}
