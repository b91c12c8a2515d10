use archviz::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock KeyValueStore that keeps values in a shared map
///
/// Clones share the same map, so a test can keep a handle after moving the
/// store into an `InventoryStore`.
#[derive(Default, Clone)]
pub struct MockKeyValueStore {
    pub values: Arc<Mutex<HashMap<String, String>>>,
    pub fail_writes: Arc<AtomicBool>,
    pub writes: Arc<AtomicUsize>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every later `set` fail, for this handle and all its clones
    pub fn failing_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("Quota exceeded");
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
