//! Parent and successor resolution

use crate::entity::{Entity, EntityKind};
use crate::error::{Error, Result};
use crate::graph::GraphSession;
use crate::item::ItemId;
use crate::properties::{FOLLOWED_BY, FOLLOWS, PART_OF_THE_SERIES, SEASON, SERIES_ORDINAL};
use crate::query::ItemQuery;
use serde::{Deserialize, Serialize};

/// One way of finding the next sibling, in decreasing certainty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The entity's own "followed by" claim
    ForwardLink,
    /// Another item whose "follows" claim names this entity
    BackwardLink,
    /// Same series, series ordinal + 1
    OrdinalInSeries,
    /// Same season, season ordinal + 1
    OrdinalInSeason,
}

impl EntityKind {
    /// Successor strategies for this kind, highest priority first
    pub fn successor_strategies(self) -> &'static [Strategy] {
        match self {
            Self::Series => &[],
            Self::Season => &[
                Strategy::ForwardLink,
                Strategy::BackwardLink,
                Strategy::OrdinalInSeries,
            ],
            Self::Episode => &[
                Strategy::ForwardLink,
                Strategy::BackwardLink,
                Strategy::OrdinalInSeries,
                Strategy::OrdinalInSeason,
            ],
        }
    }
}

/// A resolved successor and the strategy that found it
#[derive(Debug, Clone, PartialEq)]
pub struct Successor {
    pub entity: Entity,
    pub strategy: Strategy,
}

/// Parent/successor resolver
pub struct Resolver;

impl Resolver {
    /// Resolve the parent through the kind's parent-link claim
    ///
    /// Series have no parent. For Seasons and Episodes a missing link is
    /// malformed data.
    pub async fn parent(entity: &Entity, session: &GraphSession) -> Result<Option<Entity>> {
        let Some((link, parent_kind)) = entity.kind().parent_link() else {
            return Ok(None);
        };

        let target = entity.reference(link)?.ok_or_else(|| {
            Error::malformed(entity.title(), format!("{} is missing {}", entity, link))
        })?;

        tracing::debug!("Resolving parent of {} via {}", entity, link);
        let item = session.fetch(target).await?;
        Ok(Some(Entity::from_item(item, parent_kind)))
    }

    /// Run the kind's strategies in order and return the first hit
    pub async fn resolve_next(entity: &Entity, session: &GraphSession) -> Result<Option<Successor>> {
        for &strategy in entity.kind().successor_strategies() {
            tracing::debug!("Resolving next of {}: trying {:?}", entity, strategy);

            if let Some(id) = Self::attempt(strategy, entity, session).await? {
                let item = session.fetch(&id).await?;
                let next = Entity::from_item(item, entity.kind());
                tracing::debug!("{:?} resolved next of {} to {}", strategy, entity, next);
                return Ok(Some(Successor {
                    entity: next,
                    strategy,
                }));
            }
        }

        tracing::debug!("No successor found for {}", entity);
        Ok(None)
    }

    /// Next sibling by series ordinal alone
    pub async fn next_in_series(entity: &Entity, session: &GraphSession) -> Result<Option<Entity>> {
        Self::resolve_with(Strategy::OrdinalInSeries, entity, session).await
    }

    /// Next episode by season ordinal alone
    pub async fn next_in_season(entity: &Entity, session: &GraphSession) -> Result<Option<Entity>> {
        Self::resolve_with(Strategy::OrdinalInSeason, entity, session).await
    }

    async fn resolve_with(
        strategy: Strategy,
        entity: &Entity,
        session: &GraphSession,
    ) -> Result<Option<Entity>> {
        match Self::attempt(strategy, entity, session).await? {
            Some(id) => {
                let item = session.fetch(&id).await?;
                Ok(Some(Entity::from_item(item, entity.kind())))
            }
            None => Ok(None),
        }
    }

    /// Run one strategy; `None` means it does not apply or found nothing
    pub async fn attempt(
        strategy: Strategy,
        entity: &Entity,
        session: &GraphSession,
    ) -> Result<Option<ItemId>> {
        if strategy == Strategy::ForwardLink {
            return Ok(entity.reference(FOLLOWED_BY)?.cloned());
        }

        match Self::successor_query(strategy, entity)? {
            Some(query) => session.first_match(&query).await,
            None => Ok(None),
        }
    }

    /// Build the query a strategy would issue, if it applies to this entity
    pub fn successor_query(strategy: Strategy, entity: &Entity) -> Result<Option<ItemQuery>> {
        match strategy {
            Strategy::ForwardLink => Ok(None),
            Strategy::BackwardLink => {
                Ok(Some(ItemQuery::new().with_reference(FOLLOWS, entity.id())))
            }
            Strategy::OrdinalInSeries => {
                let (Some(ordinal), Some(series)) = (entity.ordinal_in_series()?, entity.series_id()?)
                else {
                    return Ok(None);
                };
                let Some(next) = ordinal.checked_add(1) else {
                    return Ok(None);
                };
                Ok(Some(
                    ItemQuery::new()
                        .with_reference(PART_OF_THE_SERIES, series)
                        .with_ordinal(PART_OF_THE_SERIES, SERIES_ORDINAL, next),
                ))
            }
            Strategy::OrdinalInSeason => {
                let (Some(ordinal), Some(season)) = (entity.ordinal_in_season()?, entity.season_id()?)
                else {
                    return Ok(None);
                };
                let Some(next) = ordinal.checked_add(1) else {
                    return Ok(None);
                };
                let mut query = ItemQuery::new();
                if let Some(series) = entity.series_id()? {
                    query = query.with_reference(PART_OF_THE_SERIES, series);
                }
                Ok(Some(
                    query
                        .with_reference(SEASON, season)
                        .with_ordinal(SEASON, SERIES_ORDINAL, next),
                ))
            }
        }
    }
}
