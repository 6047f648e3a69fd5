//! In-process graph used by unit tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::error::{Error, Result};
use crate::graph::{GraphSession, ItemStore, ItemStream, QueryService};
use crate::item::{Claim, FactValue, Item, ItemId};
use crate::properties::{PART_OF_THE_SERIES, SEASON, SERIES_ORDINAL};
use crate::query::ItemQuery;

/// Items in identifier order, with a counter of executed queries
#[derive(Default)]
pub struct FixtureGraph {
    items: BTreeMap<ItemId, Item>,
    queries: AtomicUsize,
    fail_queries: bool,
}

impl FixtureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn session(self) -> (GraphSession, Arc<FixtureGraph>) {
        let graph = Arc::new(self);
        (GraphSession::from_backend(graph.clone()), graph)
    }

    pub fn queries_issued(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for FixtureGraph {
    async fn fetch(&self, id: &ItemId) -> Result<Item> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

#[async_trait]
impl QueryService for FixtureGraph {
    async fn execute(&self, query: &ItemQuery) -> Result<ItemStream<'_>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries {
            return Err(Error::QueryExecution("service unavailable".to_string()));
        }
        let query = query.clone();
        let matches = self
            .items
            .values()
            .filter(move |item| query.matches(item))
            .map(|item| Ok(item.id.clone()));
        Ok(stream::iter(matches).boxed())
    }
}

pub fn series(id: &str) -> Item {
    Item::new(id)
}

/// Season linked to its series with a series ordinal
pub fn season(id: &str, series: &str, ordinal: u32) -> Item {
    Item::new(id).with_claim(
        PART_OF_THE_SERIES,
        Claim::item(series).with_qualifier(SERIES_ORDINAL, FactValue::literal(ordinal)),
    )
}

/// Episode linked to its season with a season ordinal, and no series link
pub fn episode(id: &str, season: &str, ordinal: u32) -> Item {
    Item::new(id).with_claim(
        SEASON,
        Claim::item(season).with_qualifier(SERIES_ORDINAL, FactValue::literal(ordinal)),
    )
}
