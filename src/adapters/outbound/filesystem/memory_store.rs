use crate::ports::outbound::KeyValueStore;
use crate::shared::security::{validate_store_key, validate_value_size, MAX_VALUE_SIZE};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// MemoryStore adapter: a KeyValueStore that forgets everything on exit
///
/// Used when the data directory is unusable, and applies the same key and
/// quota rules as the file-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_store_key(key)?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_store_key(key)?;
        validate_value_size(value.len() as u64, key, MAX_VALUE_SIZE)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
