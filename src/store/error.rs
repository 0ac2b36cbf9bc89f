//! Error types for the settings store.

use thiserror::Error;

use super::backend::BackendError;
use super::value::Kind;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error propagated verbatim from the storage backend. Never retried.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The stored kind differs from the requested kind.
    #[error("Kind mismatch for key '{key}': stored {stored}, requested {requested}")]
    KindMismatch {
        key: String,
        stored: Kind,
        requested: Kind,
    },
}

/// A [`Result`] type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
