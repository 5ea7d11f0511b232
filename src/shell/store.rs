use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::bookmarks::adapters::outbound::bookmark_repository_in_memory::InMemoryBookmarkRepository;
use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::shell::config::StoreConfig;
use std::sync::Arc;

pub type Stores = (Arc<dyn EventRepository>, Arc<dyn BookmarkRepository>);

pub async fn connect(config: &StoreConfig) -> anyhow::Result<Stores> {
    match config {
        StoreConfig::InMemory => {
            tracing::warn!("MONGO_URL not set, using the in-memory store");
            let events: Arc<dyn EventRepository> = Arc::new(InMemoryEventRepository::new());
            let bookmarks: Arc<dyn BookmarkRepository> =
                Arc::new(InMemoryBookmarkRepository::new());
            Ok((events, bookmarks))
        }
        StoreConfig::MongoDb { uri, database_name } => connect_mongodb(uri, database_name).await,
    }
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(uri: &str, database_name: &str) -> anyhow::Result<Stores> {
    use crate::modules::bookmarks::adapters::outbound::bookmark_repository_mongodb::MongoBookmarkRepository;
    use crate::modules::events::adapters::outbound::event_repository_mongodb::MongoEventRepository;
    use crate::shared::infrastructure::document_store::mongo::MongoDb;

    let db = MongoDb::connect(uri, database_name).await?;
    tracing::info!(database = database_name, "connected to mongodb");
    let events: Arc<dyn EventRepository> = Arc::new(MongoEventRepository::new(&db));
    let bookmarks: Arc<dyn BookmarkRepository> = Arc::new(MongoBookmarkRepository::new(&db).await?);
    Ok((events, bookmarks))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_uri: &str, _database_name: &str) -> anyhow::Result<Stores> {
    Err(crate::shell::config::ConfigError::MongoDbDisabled.into())
}
