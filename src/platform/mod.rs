//! Platform abstraction layer
//!
//! Browser/native differences live behind this module; today that is durable
//! key-value storage (LocalStorage on web, in-memory elsewhere).

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore, StoreError};
