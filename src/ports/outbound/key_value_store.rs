use crate::shared::Result;

/// KeyValueStore port for persisting inventory state
///
/// Values are opaque strings (JSON-encoded collections in practice); the
/// store neither parses nor validates them.
pub trait KeyValueStore {
    /// Reads the value stored under `key`
    ///
    /// # Returns
    /// `None` when the key has never been written
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not a valid storage key
    /// - The value exceeds the storage quota
    /// - Writing to the backing storage fails
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
