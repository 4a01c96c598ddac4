//! Key-value port and the in-memory backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{de::DeserializeOwned, Serialize};

use crate::KvError;

/// Durable key-value storage port.
///
/// Implementations wrap whatever the host environment provides (browser
/// local storage, Spin's KV store, a file). The port is deliberately small:
/// raw bytes in, raw bytes out. Typed access lives in [`KeyValueExt`].
pub trait KeyValue: Send + Sync {
    /// Read a value. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;

    /// Write a value, replacing any existing one.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError>;

    /// Remove a value. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), KvError>;
}

/// JSON convenience layer over any [`KeyValue`] backend.
pub trait KeyValueExt: KeyValue {
    /// Read and decode a value.
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = store.get_json("vitrine:cart")?;
    /// ```
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a value.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, &bytes)
    }
}

impl<S: KeyValue + ?Sized> KeyValueExt for S {}

/// In-memory [`KeyValue`] backend.
///
/// Clones share the same underlying map, so a handle can be kept around to
/// inspect what a consumer persisted. Used in tests and native development;
/// production sessions plug the host storage in behind the same port.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        self.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        self.lock().remove(key);
        Ok(())
    }
}
