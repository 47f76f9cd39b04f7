//! Persistence adapter: durable snapshots with default-fallback loading.
//!
//! One durable record holds the whole content model:
//! `{ schemaVersion, savedAt, config, sections }`. Loading is total —
//! missing, unreadable or corrupt data is absorbed into schema defaults and
//! logged, never surfaced to the caller. Saving is best-effort; failures are
//! returned so the store can report them as non-fatal warnings.
//!
//! # Migration policy
//!
//! Snapshots written by older schemas may lack fields introduced since. The
//! stored config deserializes into a [`SiteConfigPatch`] and is merged over
//! a fresh `SiteConfig::default()` field by field; each stored section
//! element deserializes independently with per-field defaults. An element
//! that is individually unreadable is dropped with a warning instead of
//! discarding the whole snapshot. `schemaVersion` is written so a future
//! migration chain can dispatch on it; today every version merges additively.

pub mod backend;

pub use backend::{
    default_content_path, resolve_content_path, FileBackend, MemoryBackend, SnapshotBackend,
};

use crate::model::{
    default_sections, PersistError, SectionContent, SiteConfig, SiteConfigPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Current snapshot schema version. Absence in a stored snapshot means the
/// oldest known schema.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    config: &'a SiteConfig,
    sections: &'a [SectionContent],
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SnapshotIn {
    schema_version: Option<u32>,
    config: SiteConfigPatch,
    sections: Vec<serde_json::Value>,
}

/// Adapter between the content store and one [`SnapshotBackend`].
#[derive(Debug)]
pub struct PersistenceAdapter<B> {
    backend: B,
}

impl<B: SnapshotBackend> PersistenceAdapter<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read access to the backend (tests inspect written snapshots).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the last durable snapshot, or schema defaults.
    ///
    /// Total: corruption at any level is absorbed. A missing or unparsable
    /// snapshot yields the full default content set; a parsable snapshot
    /// with individually unreadable section elements keeps the rest.
    pub fn load(&self) -> (SiteConfig, Vec<SectionContent>) {
        let raw = match self.backend.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored snapshot; starting from schema defaults");
                return (SiteConfig::default(), default_sections());
            }
            Err(error) => {
                warn!(%error, "unreadable snapshot; starting from schema defaults");
                return (SiteConfig::default(), default_sections());
            }
        };

        let snapshot: SnapshotIn = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(%error, "corrupt snapshot; starting from schema defaults");
                return (SiteConfig::default(), default_sections());
            }
        };
        debug!(
            schema_version = snapshot.schema_version.unwrap_or(0),
            "loaded content snapshot"
        );

        let mut config = SiteConfig::default();
        snapshot.config.apply_to(&mut config);

        let mut sections = Vec::with_capacity(snapshot.sections.len());
        for element in snapshot.sections {
            match serde_json::from_value::<SectionContent>(element) {
                Ok(section) => sections.push(section),
                Err(error) => warn!(%error, "dropping unreadable section element"),
            }
        }
        (config, sections)
    }

    /// Write the full snapshot durably. Best-effort: the caller decides how
    /// to surface a failure (the store logs it and keeps the in-memory state).
    pub fn save(
        &mut self,
        config: &SiteConfig,
        sections: &[SectionContent],
    ) -> Result<(), PersistError> {
        let raw = encode(config, sections)?;
        self.backend.write(&raw)
    }
}

/// Serialize a snapshot document with the current schema version.
pub fn encode(config: &SiteConfig, sections: &[SectionContent]) -> Result<String, PersistError> {
    let snapshot = SnapshotOut {
        schema_version: SCHEMA_VERSION,
        saved_at: Utc::now(),
        config,
        sections,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
