use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Versioned key for the listing collection. Breaking schema changes bump
/// the suffix and abandon the old key; there is no migration routine.
pub const LISTINGS_KEY: &str = "seahome_listings_v15";

/// Versioned key for the user collection.
pub const USERS_KEY: &str = "seahome_users_v2";

/// Session-scoped flag set once the admin password has been confirmed.
pub const ADMIN_SESSION_KEY: &str = "isAdminAuth";

/// String key-value store in the shape of browser local storage.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Durable store keeping one JSON document per key under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

/// Ephemeral in-memory store, used for session-scoped state and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Load a collection from the store, falling back when the key is absent,
/// the value is empty, or the payload fails to parse. A malformed payload
/// is logged and replaced; it is never surfaced to the caller.
pub fn load_collection<T, S, F>(store: &S, key: &str, fallback: F) -> Vec<T>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
    F: FnOnce() -> Vec<T>,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored value for '{key}', using fallback collection");
            return fallback();
        }
        Err(error) => {
            warn!("Failed to read '{key}': {error:#}, using fallback collection");
            return fallback();
        }
    };

    if raw.trim().is_empty() {
        debug!("Stored value for '{key}' is empty, using fallback collection");
        return fallback();
    }

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(error) => {
            warn!("Stored value for '{key}' is malformed ({error}), resetting to fallback");
            fallback()
        }
    }
}

/// Serialize and store the full collection, replacing any previous value.
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let json = serde_json::to_string_pretty(items)
        .with_context(|| format!("Failed to serialize collection for '{key}'"))?;
    store.set(key, &json)
}
