//! JSON snapshots of graph items
//!
//! A snapshot is a versioned dump of items, loaded into a `MemoryStore`.

use std::path::Path;

use crate::error::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use tvgraph_core::Item;

/// Current snapshot format version
pub const CURRENT_VERSION: u32 = 1;

/// On-disk snapshot layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Snapshot {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            version: CURRENT_VERSION,
            items,
        }
    }

    /// Parse a snapshot, rejecting versions this build cannot read
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;

        if snapshot.version == 0 || snapshot.version > CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                supported: CURRENT_VERSION,
            });
        }

        tracing::debug!(
            "Parsed snapshot v{} with {} items",
            snapshot.version,
            snapshot.items.len()
        );
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> StorageResult<Self> {
        tracing::debug!("Loading snapshot from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
