//! Error types for the persistence layer.
//!
//! The reducer itself is total and has no failure modes; the only errors in
//! this crate come from reading or writing the durable slot.

use thiserror::Error;

/// Errors from durable-slot reads and writes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot's backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding store state for persistence failed.
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Io(std::io::Error::other("disk gone"));
        assert!(err.to_string().contains("disk gone"));
    }
}
