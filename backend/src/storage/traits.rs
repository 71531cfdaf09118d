//! # Storage Traits
//!
//! The single seam between the domain layer and whatever actually holds the
//! bytes. Writes are synchronous and blocking from the caller's perspective.

use anyhow::Result;

/// Named string blobs, read and written whole
pub trait KeyValueStore {
    /// Read the blob stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
