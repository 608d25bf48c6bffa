//! Persistent blob store seam backing the settings record.

use std::collections::HashMap;
use std::sync::Mutex;

/// A single-key-per-record persistent blob store.
///
/// Models whatever the hosting environment persists small strings in
/// (a browser's local storage, a flat file, ...). Reads and writes are
/// infallible by contract; a missing key is simply `None`.
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str);
}

/// An in-memory blob store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("blob store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("blob store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}
