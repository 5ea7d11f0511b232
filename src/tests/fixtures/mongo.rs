use crate::shared::infrastructure::document_store::mongo::MongoDb;
use uuid::Uuid;

/// A throwaway database on the server named by MONGO_URL.
pub async fn test_database() -> MongoDb {
    let uri = std::env::var("MONGO_URL").expect("MONGO_URL must be set for integration tests");
    MongoDb::connect(&uri, &format!("festival_planner_test_{}", Uuid::now_v7().simple()))
        .await
        .expect("failed to connect to mongodb")
}
