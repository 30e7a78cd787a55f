//! Error types for the persistence layer.

use thiserror::Error;

/// Errors returned by [`TaskRepository`](crate::core::services::TaskRepository)
/// implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No `window`, or the browser refused access to `localStorage`
    /// (private mode, sandboxed iframe).
    #[error("local storage is unavailable")]
    Unavailable,

    /// Storage exists but refused the read (SecurityError and the like).
    #[error("failed to read tasks: {0}")]
    Read(String),

    /// The stored payload could not be encoded.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Some tasks dropped out while encoding; the write was aborted so the
    /// stored list is not truncated.
    #[error("lost {lost} of {total} tasks during serialization, save aborted")]
    DataLoss { lost: usize, total: usize },

    /// The stored payload is not a JSON array.
    #[error("stored tasks are not a list: {0}")]
    Decode(String),

    /// The backend rejected the write (quota exceeded, injected failure).
    #[error("failed to write tasks: {0}")]
    Write(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
