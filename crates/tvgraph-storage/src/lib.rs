//! tvgraph Storage - Item stores for the television model
//!
//! This crate provides an in-memory backend implementing both collaborator
//! traits of `tvgraph-core`, loadable from JSON snapshots.

pub mod error;
pub mod memory;
pub mod snapshot;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use snapshot::{Snapshot, CURRENT_VERSION};
