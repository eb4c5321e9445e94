use std::collections::HashMap;

use crate::storage::{KeyValueBackend, StoreError};

/// Key-value backend that lives only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-filled with `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.entries.insert(key.to_string(), value.to_string());
        backend
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
