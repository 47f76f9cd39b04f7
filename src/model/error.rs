//! Error taxonomy for the store boundary.
//!
//! All errors stay local to the store: mutation errors are returned to the
//! caller with state unchanged, persistence errors are absorbed into a
//! non-fatal warning channel, and load corruption is recovered silently via
//! schema defaults. No error from this module ever crashes page rendering.

use crate::model::identifiers::SectionId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors signalled by content-store mutations.
///
/// Every variant leaves the store state exactly as it was: there are no
/// partial mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The mutation referenced a section id absent from the collection.
    #[error("no section with id '{0}'")]
    SectionNotFound(SectionId),

    /// `add_section` was given an id that already exists. The collection is
    /// keyed by id; replacing silently would lose data.
    #[error("a section with id '{0}' already exists")]
    DuplicateSection(SectionId),

    /// `reorder_sections` was given a list that is not an exact permutation
    /// of the current ids (wrong length, duplicate, or unknown id).
    /// Partial reorders are rejected outright to prevent silent data loss.
    #[error("reorder list ({provided} ids) is not a permutation of the current {current} sections")]
    ReorderMismatch {
        /// Number of ids the caller provided.
        provided: usize,
        /// Number of sections currently in the store.
        current: usize,
    },
}

/// Errors from the persistence adapter.
///
/// A load-side error is absorbed by `PersistenceAdapter::load` (the caller
/// receives schema defaults); a save-side error is reported to the store as
/// a non-fatal warning and never rolls back the in-memory mutation.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The snapshot file exists but could not be read.
    #[error("failed to read content snapshot at {path}: {source}")]
    Read {
        /// Snapshot path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be written durably.
    #[error("failed to write content snapshot at {path}: {source}")]
    Write {
        /// Snapshot path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be serialized.
    #[error("failed to encode content snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backing store refused the write for capacity reasons.
    #[error("storage quota exceeded")]
    QuotaExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_not_found_names_the_id() {
        let err = StoreError::SectionNotFound(SectionId::new("spa").unwrap());
        assert!(err.to_string().contains("'spa'"));
    }

    #[test]
    fn reorder_mismatch_reports_both_counts() {
        let err = StoreError::ReorderMismatch {
            provided: 2,
            current: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn persist_write_error_carries_path_context() {
        let err = PersistError::Write {
            path: PathBuf::from("/data/content.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/content.json"));
        assert!(msg.contains("denied"));
    }
}
