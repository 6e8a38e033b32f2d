use bridge_traits::data::DocumentStoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Rejection from the native document store, as received.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

pub type Result<T> = std::result::Result<T, DataError>;
