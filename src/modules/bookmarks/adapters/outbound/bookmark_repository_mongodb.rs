use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::bookmarks::adapters::outbound::bookmark_toggle::{
    InsertOutcome, toggle_with_retry,
};
use crate::modules::bookmarks::core::bookmark::{Bookmark, ToggleOutcome};
use crate::shared::core::primitives::{EventId, UserId};
use crate::shared::infrastructure::document_store::StoreError;
use crate::shared::infrastructure::document_store::mongo::{MongoDb, is_duplicate_key};
use futures::TryStreamExt;
use mongodb::bson::{Bson, DateTime, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

static COL: &str = "bookmarks";

#[derive(Debug, Serialize, Deserialize)]
struct BookmarkDocument {
    user_id: String,
    event_id: String,
    /// Written as a BSON date. Plain millisecond integers are read as well.
    bookmarked_at: Bson,
}

fn millis_from_bson(value: &Bson) -> Option<i64> {
    match value {
        Bson::DateTime(date) => Some(date.timestamp_millis()),
        Bson::Int64(millis) => Some(*millis),
        Bson::Int32(millis) => Some(i64::from(*millis)),
        _ => None,
    }
}

impl TryFrom<BookmarkDocument> for Bookmark {
    type Error = StoreError;

    fn try_from(document: BookmarkDocument) -> Result<Self, Self::Error> {
        let invalid = |field: &str| StoreError::Backend(format!("{COL}: invalid {field}"));
        Ok(Bookmark {
            user_id: UserId::new(document.user_id).ok_or_else(|| invalid("user_id"))?,
            event_id: document.event_id.parse().map_err(|_| invalid("event_id"))?,
            bookmarked_at: millis_from_bson(&document.bookmarked_at)
                .ok_or_else(|| invalid("bookmarked_at"))?,
        })
    }
}

pub struct MongoBookmarkRepository {
    col: Collection<BookmarkDocument>,
}

impl MongoBookmarkRepository {
    /// Ensures the unique (user_id, event_id) index the toggle relies on.
    pub async fn new(db: &MongoDb) -> Result<Self, StoreError> {
        let col = db.col::<BookmarkDocument>(COL);
        col.create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1, "event_id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;
        Ok(Self { col })
    }
}

#[async_trait::async_trait]
impl BookmarkRepository for MongoBookmarkRepository {
    async fn toggle(
        &self,
        user_id: &UserId,
        event_id: EventId,
        bookmarked_at: i64,
    ) -> Result<ToggleOutcome, StoreError> {
        let col = &self.col;
        let filter = &doc! { "user_id": user_id.as_str(), "event_id": event_id.to_string() };
        toggle_with_retry(
            move || async move {
                let deleted = col.delete_one(filter.clone()).await?;
                Ok::<bool, StoreError>(deleted.deleted_count > 0)
            },
            move || {
                let document = BookmarkDocument {
                    user_id: user_id.to_string(),
                    event_id: event_id.to_string(),
                    bookmarked_at: Bson::DateTime(DateTime::from_millis(bookmarked_at)),
                };
                async move {
                    match col.insert_one(document).await {
                        Ok(_) => Ok(InsertOutcome::Inserted),
                        Err(err) if is_duplicate_key(&err) => Ok(InsertOutcome::Conflict),
                        Err(err) => Err(StoreError::from(err)),
                    }
                }
            },
        )
        .await
    }

    async fn find(
        &self,
        user_id: &UserId,
        event_id: EventId,
    ) -> Result<Option<Bookmark>, StoreError> {
        self.col
            .find_one(doc! { "user_id": user_id.as_str(), "event_id": event_id.to_string() })
            .await?
            .map(Bookmark::try_from)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, StoreError> {
        let documents: Vec<BookmarkDocument> = self
            .col
            .find(doc! { "user_id": user_id.as_str() })
            .sort(doc! { "bookmarked_at": 1 })
            .await?
            .try_collect()
            .await?;
        // Earlier deployments stored whatever the request path carried; such
        // bookmarks cannot reference an event and are skipped like dangling ones.
        Ok(documents
            .into_iter()
            .filter_map(|document| match Bookmark::try_from(document) {
                Ok(bookmark) => Some(bookmark),
                Err(err) => {
                    tracing::warn!(%user_id, error = %err, "skipping unreadable bookmark");
                    None
                }
            })
            .collect())
    }
}
