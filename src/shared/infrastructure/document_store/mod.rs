use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[cfg(feature = "mongodb")]
impl From<::mongodb::error::Error> for StoreError {
    fn from(err: ::mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

#[cfg(feature = "mongodb")]
pub mod mongo;
