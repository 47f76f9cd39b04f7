//! Durable storage backends for the content snapshot.
//!
//! The adapter talks to a [`SnapshotBackend`]: one durable slot holding the
//! raw snapshot document. [`FileBackend`] is the production implementation
//! (a single JSON file under the platform data directory);
//! [`MemoryBackend`] backs ephemeral stores and tests.

use crate::model::PersistError;
use std::path::PathBuf;

/// One durable slot of raw snapshot text.
pub trait SnapshotBackend {
    /// Read the stored snapshot, `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, PersistError>;

    /// Replace the stored snapshot.
    fn write(&mut self, raw: &str) -> Result<(), PersistError>;
}

/// File-backed snapshot storage: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given snapshot path. The file and its
    /// parent directories are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| PersistError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&mut self, raw: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, raw).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process snapshot storage for ephemeral stores and tests.
///
/// The write-failure switch simulates an exhausted backing store so the
/// non-fatal warning path can be exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    /// An empty backend: the first `read` returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with raw snapshot text.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
            fail_writes: false,
        }
    }

    /// Make subsequent writes fail with [`PersistError::QuotaExceeded`].
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The currently stored raw snapshot, if any.
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, PersistError> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, raw: &str) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::QuotaExceeded);
        }
        self.slot = Some(raw.to_string());
        Ok(())
    }
}

/// Default snapshot path: `<platform data dir>/albergo/content.json`,
/// falling back to the working directory when no data dir exists.
pub fn default_content_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("albergo").join("content.json")
    } else {
        PathBuf::from("content.json")
    }
}

/// Resolve the snapshot path with precedence: explicit argument (CLI
/// `--content`), then the `ALBERGO_CONTENT` environment variable, then
/// [`default_content_path`].
pub fn resolve_content_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(env_path) = std::env::var("ALBERGO_CONTENT") {
        return PathBuf::from(env_path);
    }
    default_content_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("albergo_backend_tests")
            .join(name)
    }

    #[test]
    fn file_backend_reads_none_when_missing() {
        let backend = FileBackend::new(temp_file("never_written.json"));
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn file_backend_roundtrips_and_creates_directories() {
        let path = temp_file("roundtrip/content.json");
        let _ = std::fs::remove_file(&path);
        let mut backend = FileBackend::new(&path);
        backend.write("{\"config\":{}}").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("{\"config\":{}}"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn memory_backend_roundtrips() {
        let mut backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());
        backend.write("snapshot").unwrap();
        assert_eq!(backend.contents(), Some("snapshot"));
    }

    #[test]
    fn memory_backend_write_failure_keeps_previous_contents() {
        let mut backend = MemoryBackend::with_contents("old");
        backend.set_fail_writes(true);
        let err = backend.write("new").unwrap_err();
        assert!(matches!(err, PersistError::QuotaExceeded));
        assert_eq!(backend.contents(), Some("old"));
    }

    #[test]
    #[serial(albergo_env)]
    fn explicit_path_wins_over_environment() {
        std::env::set_var("ALBERGO_CONTENT", "/from/env.json");
        let resolved = resolve_content_path(Some(PathBuf::from("/from/cli.json")));
        std::env::remove_var("ALBERGO_CONTENT");
        assert_eq!(resolved, PathBuf::from("/from/cli.json"));
    }

    #[test]
    #[serial(albergo_env)]
    fn environment_wins_over_default() {
        std::env::set_var("ALBERGO_CONTENT", "/from/env.json");
        let resolved = resolve_content_path(None);
        std::env::remove_var("ALBERGO_CONTENT");
        assert_eq!(resolved, PathBuf::from("/from/env.json"));
    }

    #[test]
    #[serial(albergo_env)]
    fn default_path_ends_with_content_json() {
        std::env::remove_var("ALBERGO_CONTENT");
        let resolved = resolve_content_path(None);
        assert!(resolved.to_string_lossy().ends_with("content.json"));
    }
}
