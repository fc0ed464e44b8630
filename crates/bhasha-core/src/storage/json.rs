//! JSON File Storage Implementation
//!
//! Pretty-printed JSON array of phrase records, readable and editable by
//! hand. Writes go through a temp file in the same directory followed by a
//! rename, so a crash mid-write never leaves a truncated store behind.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::{Persistence, PersistenceError};
use crate::srs::PhraseRecord;

/// File-backed vocabulary persistence
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default platform-specific location
    pub fn open_default() -> std::result::Result<Self, PersistenceError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Default vocabulary file location under the platform data directory
    pub fn default_path() -> std::result::Result<PathBuf, PersistenceError> {
        let proj_dirs = ProjectDirs::from("app", "bhasha", "bhasha").ok_or_else(|| {
            PersistenceError::Init("Could not determine project directories".to_string())
        })?;
        Ok(proj_dirs.data_dir().join("vocabulary.json"))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> std::result::Result<Vec<PhraseRecord>, PersistenceError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, records: &[PhraseRecord]) -> std::result::Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;

        // Write-then-rename keeps the previous store intact on failure
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "vocabulary store written");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record(phrase: &str) -> PhraseRecord {
        let now = Utc::now();
        PhraseRecord {
            phrase: phrase.to_string(),
            transliteration: "namaskāraṁ".to_string(),
            english: "hello".to_string(),
            context: "greeting a family member".to_string(),
            difficulty_bucket: 1,
            interval_index: 0,
            next_due_at: now + chrono::Duration::days(1),
            review_count: 0,
            correct_count: 0,
            added_at: now,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vocabulary.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vocabulary.json"));

        let records = vec![sample_record("నమస్కారం"), sample_record("వందనం")];
        store.save(&records).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        // Insertion order survives the round trip
        assert_eq!(loaded[0].phrase, "నమస్కారం");
        assert_eq!(loaded[1].phrase, "వందనం");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data/vocabulary.json"));
        store.save(&[sample_record("వంకాయ")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_file_is_human_readable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vocabulary.json"));
        store.save(&[sample_record("నమస్కారం")]).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("నమస్కారం"));
        assert!(raw.contains("\"reviewCount\""));
    }
}
