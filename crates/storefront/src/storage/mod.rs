//! Persisted key-value storage.
//!
//! The storefront keeps all state as JSON-serialized values under string
//! keys, mirroring the browser local-storage contract: synchronous writes,
//! whole-value replacement, last-write-wins between concurrent writers and
//! no transactional guarantees.
//!
//! Storage failures never escape this module's typed helpers: a read that
//! fails (missing backend, corrupt JSON) degrades to the caller's default
//! value and a failed write is logged and dropped. Features degrade to
//! empty state instead of crashing.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by a storage backend.
///
/// These surface only through [`StorageBackend`] directly; the typed
/// helpers below swallow them.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value or the store file could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string-keyed store of serialized text values.
///
/// Implementations must be safe to share across the single logical actor's
/// suspension points, hence `Send + Sync`.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize the value under `key`, degrading to `T::default()`
/// on a missing key, read failure or corrupt JSON.
pub fn read_or_default<T>(storage: &dyn StorageBackend, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    read(storage, key).unwrap_or_default()
}

/// Read and deserialize the value under `key`. Failures degrade to `None`.
pub fn read<T>(storage: &dyn StorageBackend, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key, error = %e, "storage read failed");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is corrupt, treating as absent");
            None
        }
    }
}

/// Serialize and write `value` under `key`. Failures are logged and dropped.
pub fn write<T>(storage: &dyn StorageBackend, key: &str, value: &T)
where
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to serialize value for storage");
            return;
        }
    };

    if let Err(e) = storage.set(key, &raw) {
        tracing::warn!(key, error = %e, "storage write failed");
    }
}

/// Remove `key`. Failures are logged and dropped.
pub fn remove(storage: &dyn StorageBackend, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "storage remove failed");
    }
}

/// Storage keys for persisted storefront state.
pub mod keys {
    use hear_hut_core::Email;

    /// Key for the currently signed-in identity.
    pub const AUTH_USER: &str = "auth_user";

    /// Key for the list of registered identities.
    pub const USERS: &str = "users";

    /// Key for the bounded ring of auth audit events.
    pub const AUTH_EVENTS: &str = "auth_events";

    /// Key for the wishlist. Deliberately not partitioned by identity;
    /// see the design notes.
    pub const WISHLIST: &str = "wishlist";

    /// Cart key for the given identity, or the shared guest cart.
    #[must_use]
    pub fn cart(email: Option<&Email>) -> String {
        email.map_or_else(|| "cart_guest".to_owned(), |e| format!("cart_{e}"))
    }

    /// Order-archive key for the given identity, or the guest archive.
    #[must_use]
    pub fn orders(email: Option<&Email>) -> String {
        email.map_or_else(|| "orders_guest".to_owned(), |e| format!("orders_{e}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hear_hut_core::Email;

    use super::*;

    #[test]
    fn test_cart_keys() {
        let email = Email::parse("a@gmail.com").unwrap();
        assert_eq!(keys::cart(Some(&email)), "cart_a@gmail.com");
        assert_eq!(keys::cart(None), "cart_guest");
        assert_eq!(keys::orders(Some(&email)), "orders_a@gmail.com");
        assert_eq!(keys::orders(None), "orders_guest");
    }

    #[test]
    fn test_read_or_default_on_corrupt_value() {
        let store = MemoryStore::default();
        store.set("cart_guest", "not json").unwrap();
        let cart: Vec<String> = read_or_default(&store, "cart_guest");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = MemoryStore::default();
        write(&store, "users", &vec!["a".to_owned(), "b".to_owned()]);
        let users: Vec<String> = read_or_default(&store, "users");
        assert_eq!(users, vec!["a", "b"]);
    }
}
