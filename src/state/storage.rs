use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A string key-value store that plans are persisted into.
///
/// Reads never fail: anything unreadable is reported as absent.
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file mapping keys to string values.
///
/// Entries never expire. A missing or malformed file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load_entries(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "state file not readable");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed state file");
            BTreeMap::new()
        })
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.load_entries().remove(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries();
        entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), key, "state written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_memory_read_write() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").is_none());
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_file_missing_reads_absent() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("state.json"));
        assert!(storage.read("meal-plan").is_none());
    }

    #[test]
    fn test_file_roundtrip_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut storage = FileStorage::new(&path);
        storage.write("theme", "dark").unwrap();
        storage.write("meal-plan", "[]").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.read("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.read("meal-plan").as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_malformed_reads_absent_and_is_overwritten() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"meal-plan\": \"[[").unwrap();

        let mut storage = FileStorage::new(file.path());
        assert!(storage.read("meal-plan").is_none());

        storage.write("meal-plan", "x").unwrap();
        assert_eq!(storage.read("meal-plan").as_deref(), Some("x"));
    }
}
