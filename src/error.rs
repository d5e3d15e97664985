use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for the storage layer.
///
/// Every failure crossing the [`NoteStore`](crate::store::NoteStore)
/// boundary is one of these kinds; callers never see raw I/O errors except
/// wrapped here.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller error: blank id, malformed input. Never worth retrying.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No note with this id is known to the strategy.
    #[error("note not found: {0}")]
    NotFound(String),

    /// The strategy could not initialize its storage. Fatal at construction
    /// time; the shell falls back to the in-memory store.
    #[error("cannot initialize storage at {}: {reason}", path.display())]
    Construction { path: PathBuf, reason: String },

    /// On-disk data could not be decoded.
    #[error("cannot decode stored notes: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub(crate) fn blank_id() -> Self {
        StoreError::InvalidArgument("id cannot be blank".to_string())
    }
}
