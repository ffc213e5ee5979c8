//! File-backed store
//!
//! Keeps every entry in one JSON object on disk. This is the native
//! counterpart of the browser's local storage, used by the command-line
//! tools so that the survey flag survives between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreResult};

/// File name used inside a data directory
pub const STORE_FILE_NAME: &str = "local_storage.json";

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Opened file store");

        Ok(Self { path, entries })
    }

    /// Open `local_storage.json` inside `dir`, creating the directory if needed.
    pub fn open_in_dir(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Self::open(dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;

        // Write to a sibling file first so a crash never leaves half a document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nothing.json")).unwrap();
        assert_eq!(store.get("surveyShown").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = FileStore::open_in_dir(dir.path()).unwrap();
            store.set("surveyShown", "true").unwrap();
        }

        let store = FileStore::open_in_dir(dir.path()).unwrap();
        assert_eq!(store.get("surveyShown").unwrap().as_deref(), Some("true"));
        assert_eq!(store.path(), dir.path().join(STORE_FILE_NAME));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();

        let mut store = FileStore::open_in_dir(dir.path()).unwrap();
        store.set("surveyShown", "true").unwrap();
        store.remove("surveyShown").unwrap();

        let store = FileStore::open_in_dir(dir.path()).unwrap();
        assert_eq!(store.get("surveyShown").unwrap(), None);
    }

    #[test]
    fn test_open_in_nested_dir_creates_it() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = FileStore::open_in_dir(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(STORE_FILE_NAME).exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
