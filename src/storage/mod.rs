//! Persistent key-value storage for the credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CredentialStore` writes through to a `TokenStorage` on every mutation.
//! In the browser that is `localStorage`; tests and SSR use the in-memory map.

pub mod memory;

#[cfg(feature = "hydrate")]
pub mod browser;

use crate::error::StorageError;

pub use memory::MemoryStorage;

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;

/// String key-value store with get/set/remove semantics.
///
/// Methods take `&self`; backends are handles onto shared storage.
pub trait TokenStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
