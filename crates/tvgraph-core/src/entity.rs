//! Entity types: Series, Season and Episode views over graph items

use std::collections::HashMap;
use std::str::FromStr;

use crate::constraint::{Constraint, ConstraintResult};
use crate::error::{Error, Result};
use crate::graph::GraphSession;
use crate::item::{parse_ordinal, Claim, FactValue, Item, ItemId};
use crate::limits::validate_item_id;
use crate::properties::{Property, PART_OF_THE_SERIES, SEASON, SERIES_ORDINAL};
use crate::traversal::{Resolver, Successor};
use serde::{Deserialize, Serialize};

/// Kind of television entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Series,
    Season,
    Episode,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Season => "season",
            Self::Episode => "episode",
        }
    }

    /// Property linking to the parent, and the parent's kind
    pub fn parent_link(self) -> Option<(Property, EntityKind)> {
        match self {
            Self::Series => None,
            Self::Season => Some((PART_OF_THE_SERIES, Self::Series)),
            Self::Episode => Some((SEASON, Self::Season)),
        }
    }

    fn type_name(self) -> &'static str {
        match self {
            Self::Series => "Series",
            Self::Season => "Season",
            Self::Episode => "Episode",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "series" => Ok(Self::Series),
            "season" => Ok(Self::Season),
            "episode" => Ok(Self::Episode),
            other => Err(format!(
                "unknown entity kind '{}' (expected series, season or episode)",
                other
            )),
        }
    }
}

/// A Series, Season or Episode backed by one graph item
///
/// Entities are read projections of the item at fetch time. Nothing is
/// cached between calls: `parent` and `next` fetch again every time.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    item: Item,
}

impl Entity {
    /// Fetch an item and wrap it as an entity of the given kind
    pub async fn from_identifier(
        session: &GraphSession,
        id: &str,
        kind: EntityKind,
    ) -> Result<Self> {
        validate_item_id(id).map_err(|e| Error::InvalidItemId(e.to_string()))?;
        let item = session.fetch(&ItemId::from(id)).await?;
        Ok(Self::from_item(item, kind))
    }

    /// Wrap an item already in hand
    pub fn from_item(item: Item, kind: EntityKind) -> Self {
        Self { kind, item }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// English label, if the item has one
    pub fn label(&self) -> Option<&str> {
        self.item.label()
    }

    /// Page title of the backing item, which is its identifier
    pub fn title(&self) -> &str {
        self.item.id.as_str()
    }

    /// All claims keyed by property id
    pub fn facts(&self) -> &HashMap<String, Vec<Claim>> {
        &self.item.claims
    }

    pub fn has_fact(&self, property: Property) -> bool {
        self.item.has_claim(property)
    }

    pub fn first_claim(&self, property: Property) -> Option<&Claim> {
        self.item.first_claim(property)
    }

    /// Item referenced by the first claim of `property`
    ///
    /// Absent claims give `None`; a literal where a reference belongs is malformed.
    pub fn reference(&self, property: Property) -> Result<Option<&ItemId>> {
        match self.first_claim(property) {
            None => Ok(None),
            Some(claim) => claim.value.as_item().map(Some).ok_or_else(|| {
                Error::malformed(
                    self.title(),
                    format!("{} should reference an item", property),
                )
            }),
        }
    }

    /// Identifier of the series this entity belongs to
    pub fn series_id(&self) -> Result<Option<&ItemId>> {
        match self.kind {
            EntityKind::Series => Ok(None),
            _ => self.reference(PART_OF_THE_SERIES),
        }
    }

    /// Identifier of the season this episode belongs to
    pub fn season_id(&self) -> Result<Option<&ItemId>> {
        match self.kind {
            EntityKind::Episode => self.reference(SEASON),
            _ => Ok(None),
        }
    }

    /// Position within the series, from the qualifier on the series link
    pub fn ordinal_in_series(&self) -> Result<Option<u32>> {
        match self.kind {
            EntityKind::Series => Ok(None),
            _ => self.ordinal_on(PART_OF_THE_SERIES),
        }
    }

    /// Position within the season, from the qualifier on the season link
    pub fn ordinal_in_season(&self) -> Result<Option<u32>> {
        match self.kind {
            EntityKind::Episode => self.ordinal_on(SEASON),
            _ => Ok(None),
        }
    }

    fn ordinal_on(&self, link: Property) -> Result<Option<u32>> {
        let Some(value) = self
            .first_claim(link)
            .and_then(|claim| claim.qualifier(SERIES_ORDINAL))
        else {
            return Ok(None);
        };

        match value {
            FactValue::Literal(raw) => parse_ordinal(raw).map(Some).ok_or_else(|| {
                Error::malformed(
                    self.title(),
                    format!("{} on {} is not a number: {:?}", SERIES_ORDINAL, link, raw),
                )
            }),
            FactValue::Item(target) => Err(Error::malformed(
                self.title(),
                format!("{} on {} references item {}", SERIES_ORDINAL, link, target),
            )),
        }
    }

    /// The containing Season (for an Episode) or Series (for a Season)
    pub async fn parent(&self, session: &GraphSession) -> Result<Option<Entity>> {
        Resolver::parent(self, session).await
    }

    /// The next sibling in the same collection, if any
    pub async fn next(&self, session: &GraphSession) -> Result<Option<Entity>> {
        Ok(Resolver::resolve_next(self, session)
            .await?
            .map(|successor| successor.entity))
    }

    /// Like `next`, but also reports which signal found the successor
    pub async fn successor(&self, session: &GraphSession) -> Result<Option<Successor>> {
        Resolver::resolve_next(self, session).await
    }

    /// Next sibling by series ordinal only
    pub async fn next_in_series(&self, session: &GraphSession) -> Result<Option<Entity>> {
        Resolver::next_in_series(self, session).await
    }

    /// Next episode by season ordinal only
    pub async fn next_in_season(&self, session: &GraphSession) -> Result<Option<Entity>> {
        Resolver::next_in_season(self, session).await
    }

    /// Evaluate this kind's constraint list, in order
    pub async fn constraints(&self, session: &GraphSession) -> Result<Vec<ConstraintResult>> {
        let rules: Vec<Constraint> = self.kind.constraints();
        let mut results = Vec::with_capacity(rules.len());
        for rule in &rules {
            results.push(rule.evaluate(self, session).await?);
        }
        tracing::debug!(
            "Evaluated {} constraints on {}, {} failed",
            results.len(),
            self,
            results.iter().filter(|r| !r.passed).count()
        );
        Ok(results)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}({} ({}))", self.kind.type_name(), self.title(), label),
            None => write!(f, "{}({})", self.kind.type_name(), self.title()),
        }
    }
}
