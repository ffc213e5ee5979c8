//! Key-Value Stores
//!
//! The site persists exactly one value: whether the survey has been shown.
//! The controller reaches storage only through [`KeyValueStore`], so hosts
//! plug in whatever device-local storage they have:
//!
//! - [`MemoryStore`]: process memory, for tests
//! - [`FileStore`]: a JSON file, for the command-line tools
//! - browser `localStorage`, implemented by the frontend crate

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
