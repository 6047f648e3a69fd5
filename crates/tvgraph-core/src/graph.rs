//! Collaborator traits for the item store and the graph-query service

use std::sync::Arc;

use crate::error::Result;
use crate::item::{Item, ItemId};
use crate::query::ItemQuery;
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};

/// Lazy, non-restartable sequence of query results
pub type ItemStream<'a> = BoxStream<'a, Result<ItemId>>;

/// Point lookup of items by identifier
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch an item; fails with `Error::NotFound` for unknown identifiers
    async fn fetch(&self, id: &ItemId) -> Result<Item>;
}

/// Execution of structured item queries
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Execute a query, yielding matching item identifiers
    async fn execute(&self, query: &ItemQuery) -> Result<ItemStream<'_>>;
}

/// Handle to the collaborators every traversal and validation call uses
///
/// The caller owns its lifecycle; nothing here is process-wide.
#[derive(Clone)]
pub struct GraphSession {
    store: Arc<dyn ItemStore>,
    queries: Arc<dyn QueryService>,
}

impl GraphSession {
    pub fn new(store: Arc<dyn ItemStore>, queries: Arc<dyn QueryService>) -> Self {
        Self { store, queries }
    }

    /// Session over a backend implementing both collaborators
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ItemStore + QueryService + 'static,
    {
        Self {
            store: backend.clone(),
            queries: backend,
        }
    }

    pub async fn fetch(&self, id: &ItemId) -> Result<Item> {
        self.store.fetch(id).await
    }

    /// Execute a query and consume at most its first result
    pub async fn first_match(&self, query: &ItemQuery) -> Result<Option<ItemId>> {
        let mut results = self.queries.execute(query).await?;
        results.next().await.transpose()
    }
}

impl std::fmt::Debug for GraphSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphSession").finish_non_exhaustive()
    }
}
