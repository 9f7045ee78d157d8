//! Key-value persistence for session state
//!
//! The session only needs "load a blob by key" and "save a blob by key";
//! the backing medium is swappable behind `KeyValueStore`.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::{SessionError, SessionResult};

/// File name used by `FileStore` inside its data directory
pub const SESSION_FILE: &str = "session.json";

/// Opaque blob store keyed by namespace
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn load(&self, key: &str) -> SessionResult<Option<Value>>;

    /// Replace the blob stored under `key`
    fn save(&self, key: &str, value: Value) -> SessionResult<()>;
}

/// Process-local store; contents vanish on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> SessionResult<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> SessionResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The file maps keys to blobs. Writes go to a temporary file that is then
/// renamed over the original.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Store at `<data_dir>/session.json`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::at_path(data_dir.as_ref().join(SESSION_FILE))
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SessionResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(SessionError::Serialization(format!(
                "expected a JSON object in {:?}, found {}",
                self.path,
                type_name(&other)
            ))),
        }
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> SessionResult<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: Value) -> SessionResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?;

        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&Value::Object(entries))?)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = ?self.path, key, "Saved session blob");
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", json!({"counter": 3})).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!({"counter": 3})));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();

        FileStore::new(dir.path()).save("a", json!(1)).unwrap();
        FileStore::new(dir.path()).save("b", json!({"x": true})).unwrap();

        let store = FileStore::new(dir.path());
        assert_eq!(store.load("a").unwrap(), Some(json!(1)));
        assert_eq!(store.load("b").unwrap(), Some(json!({"x": true})));
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deeper"));
        store.save("k", json!("v")).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!("v")));
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::at_path(&path);
        assert!(matches!(
            store.load("k"),
            Err(SessionError::Serialization(_))
        ));
    }
}
