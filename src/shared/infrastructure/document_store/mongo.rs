use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Collection, Database};

const DUPLICATE_KEY: i32 = 11000;

/// Handle on one MongoDB database. Cheap to clone.
#[derive(Clone, Debug)]
pub struct MongoDb(pub Client, pub String);

impl MongoDb {
    pub async fn connect(uri: &str, database_name: &str) -> mongodb::error::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self(client, database_name.to_string()))
    }

    pub fn db(&self) -> Database {
        self.0.database(&self.1)
    }

    pub fn col<T: Send + Sync>(&self, collection: &str) -> Collection<T> {
        self.db().collection(collection)
    }
}

pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}
