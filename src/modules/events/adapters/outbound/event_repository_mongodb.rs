use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::{Event, NewEvent};
use crate::shared::core::primitives::EventId;
use crate::shared::infrastructure::document_store::StoreError;
use crate::shared::infrastructure::document_store::mongo::MongoDb;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};

static COL: &str = "events";

#[derive(Debug, Serialize, Deserialize)]
struct EventDocument {
    #[serde(rename = "_id")]
    id: Bson,
    name: String,
    date: String,
    location: String,
    description: String,
    category: String,
}

/// Uuid ids are stored as strings, legacy ids keep their native object id type.
fn id_to_bson(id: EventId) -> Bson {
    match id {
        EventId::Uuid(_) => Bson::String(id.to_string()),
        EventId::ObjectId(bytes) => Bson::ObjectId(ObjectId::from_bytes(bytes)),
    }
}

fn id_from_bson(id: &Bson) -> Result<EventId, StoreError> {
    match id {
        Bson::ObjectId(oid) => Ok(EventId::ObjectId(oid.bytes())),
        Bson::String(value) => value
            .parse()
            .map_err(|err| StoreError::Backend(format!("{COL}: {err}"))),
        other => Err(StoreError::Backend(format!(
            "{COL}: unsupported _id type {:?}",
            other.element_type()
        ))),
    }
}

impl From<&Event> for EventDocument {
    fn from(event: &Event) -> Self {
        Self {
            id: id_to_bson(event.id),
            name: event.name.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            category: event.category.clone(),
        }
    }
}

impl TryFrom<EventDocument> for Event {
    type Error = StoreError;

    fn try_from(document: EventDocument) -> Result<Self, Self::Error> {
        Ok(Event {
            id: id_from_bson(&document.id)?,
            name: document.name,
            date: document.date,
            location: document.location,
            description: document.description,
            category: document.category,
        })
    }
}

pub struct MongoEventRepository {
    col: Collection<EventDocument>,
}

impl MongoEventRepository {
    pub fn new(db: &MongoDb) -> Self {
        Self { col: db.col(COL) }
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Event>, StoreError> {
        // v7 uuids and object ids both grow with insertion time, so `_id` breaks
        // date ties in insertion order within each id form.
        let documents: Vec<EventDocument> = self
            .col
            .find(filter)
            .sort(doc! { "date": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;
        documents.into_iter().map(Event::try_from).collect()
    }
}

#[async_trait::async_trait]
impl EventRepository for MongoEventRepository {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        let event = event.into_event(EventId::generate());
        self.col.insert_one(EventDocument::from(&event)).await?;
        Ok(event)
    }

    async fn insert_many(&self, events: Vec<NewEvent>) -> Result<Vec<Event>, StoreError> {
        let events: Vec<Event> = events
            .into_iter()
            .map(|event| event.into_event(EventId::generate()))
            .collect();
        if !events.is_empty() {
            self.col
                .insert_many(events.iter().map(EventDocument::from))
                .await?;
        }
        Ok(events)
    }

    async fn list_by_date(&self) -> Result<Vec<Event>, StoreError> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_ids(&self, ids: &[EventId]) -> Result<Vec<Event>, StoreError> {
        let ids: Vec<Bson> = ids.iter().copied().map(id_to_bson).collect();
        self.find_sorted(doc! { "_id": { "$in": ids } }).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.col.count_documents(doc! {}).await?)
    }
}

#[cfg(test)]
mod mongo_event_repository_tests {
    use super::*;
    use crate::tests::fixtures::events::NewEventBuilder;
    use crate::tests::fixtures::mongo::test_database;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn integration_it_should_list_inserted_events_by_date() {
        let db = test_database().await;
        let repository = MongoEventRepository::new(&db);
        for date in ["2025-12-01", "2025-03-10"] {
            repository
                .insert(NewEventBuilder::new().date(date).build())
                .await
                .unwrap();
        }
        let events = repository.list_by_date().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, "2025-03-10");

        let found = repository.find_by_ids(&[events[1].id]).await.unwrap();
        assert_eq!(found, vec![events[1].clone()]);
        assert_eq!(repository.count().await.unwrap(), 2);
        db.db().drop().await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn integration_it_should_read_events_stored_with_object_ids() {
        let db = test_database().await;
        let oid = ObjectId::new();
        db.col::<Document>(COL)
            .insert_one(doc! {
                "_id": oid,
                "name": "Summer Music Festival",
                "date": "2025-08-20",
                "location": "Central Park, New York",
                "description": "A vibrant summer music festival featuring top artists",
                "category": "Music",
            })
            .await
            .unwrap();
        let repository = MongoEventRepository::new(&db);
        repository
            .insert(NewEventBuilder::new().date("2025-07-01").build())
            .await
            .unwrap();

        let events = repository.list_by_date().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].name, "Summer Music Festival");
        assert_eq!(events[1].id, EventId::ObjectId(oid.bytes()));
        assert_eq!(events[1].id.to_string(), oid.to_hex());

        let legacy_id: EventId = oid.to_hex().parse().unwrap();
        let found = repository.find_by_ids(&[legacy_id]).await.unwrap();
        assert_eq!(found, vec![events[1].clone()]);
        db.db().drop().await.unwrap();
    }
}
