use crate::domain::ports::KeyValueStore;
use crate::error::{CartError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Key-value slots held in a shared map.
///
/// Clones share the same map, so a test can hand one clone to an engine and
/// inspect what was persisted through another. Writes are counted.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls performed so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn poisoned() -> CartError {
    CartError::StorageError("In-memory store lock poisoned".to_string())
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
