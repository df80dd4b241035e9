use thiserror::Error;

/// Failures raised while writing a collection back to storage.
///
/// Read failures never show up here: a malformed or missing snapshot is
/// replaced by an empty collection during [`crate::store::RecordStore::load`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage medium rejected the write (quota exceeded, storage
    /// disabled, ...). Carries the key that could not be written.
    #[error("Could not write `{key}` to storage: {reason}")]
    Write { key: String, reason: String },

    #[error("Could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}
