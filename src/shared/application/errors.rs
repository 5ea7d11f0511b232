use crate::shared::core::primitives::IdError;
use crate::shared::infrastructure::document_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    InvalidId(#[from] IdError),
}
