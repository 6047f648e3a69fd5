//! In-memory item store and query service

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::snapshot::Snapshot;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tvgraph_core::{Error, Item, ItemId, ItemQuery, ItemStore, ItemStream, QueryService, Result};

/// In-memory graph backend
///
/// Queries scan items in identifier order, so the first result of a query
/// is deterministic.
pub struct MemoryStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    /// Build a store from items, rejecting duplicate identifiers
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> StorageResult<Self> {
        let store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Load every item of a JSON snapshot
    pub fn load_snapshot(path: &Path) -> StorageResult<Self> {
        let snapshot = Snapshot::load(path)?;
        let store = Self::from_items(snapshot.items)?;
        if store.is_empty()? {
            tracing::warn!("Snapshot {:?} holds no items", path);
        } else {
            tracing::info!("Loaded {} items from {:?}", store.len()?, path);
        }
        Ok(store)
    }

    pub fn insert(&self, item: Item) -> StorageResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        if items.contains_key(&item.id) {
            return Err(StorageError::DuplicateItem(item.id.to_string()));
        }
        items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn len(&self) -> StorageResult<usize> {
        self.items
            .read()
            .map(|items| items.len())
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn fetch(&self, id: &ItemId) -> Result<Item> {
        let items = self
            .items
            .read()
            .map_err(|e| Error::Storage(format!("Lock error: {}", e)))?;
        items
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

#[async_trait]
impl QueryService for MemoryStore {
    async fn execute(&self, query: &ItemQuery) -> Result<ItemStream<'_>> {
        let items = self
            .items
            .read()
            .map_err(|e| Error::QueryExecution(format!("Lock error: {}", e)))?;

        // The lock cannot outlive this call, so matches are collected up front.
        let matches: Vec<ItemId> = items
            .values()
            .filter(|item| query.matches(item))
            .map(|item| item.id.clone())
            .collect();
        tracing::trace!("Query {:?} matched {} items", query, matches.len());

        Ok(stream::iter(matches.into_iter().map(Ok)).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use tvgraph_core::properties::FOLLOWS;
    use tvgraph_core::Claim;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
        store.insert(Item::new("Q1").with_label("Pilot")).unwrap();

        let item = store.fetch(&ItemId::from("Q1")).await.unwrap();
        assert_eq!(item.label(), Some("Pilot"));

        let missing = store.fetch(&ItemId::from("Q2")).await;
        assert!(matches!(missing, Err(Error::NotFound(ref id)) if id == "Q2"));
    }

    #[test]
    fn test_duplicate_insert() {
        let store = MemoryStore::new();
        store.insert(Item::new("Q1")).unwrap();
        assert!(matches!(
            store.insert(Item::new("Q1")),
            Err(StorageError::DuplicateItem(_))
        ));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_query_results_in_id_order() {
        let store = MemoryStore::from_items([
            Item::new("Q3").with_claim(FOLLOWS, Claim::item("Q1")),
            Item::new("Q2").with_claim(FOLLOWS, Claim::item("Q1")),
            Item::new("Q4"),
        ])
        .unwrap();

        let query = ItemQuery::new().with_reference(FOLLOWS, &ItemId::from("Q1"));
        let ids: Vec<ItemId> = store.execute(&query).await.unwrap().try_collect().await.unwrap();

        assert_eq!(ids, vec![ItemId::from("Q2"), ItemId::from("Q3")]);
    }
}
