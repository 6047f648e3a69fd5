//! Item types: the raw projection of a graph node

use crate::properties::Property;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Language used for labels
pub const LABEL_LANGUAGE: &str = "en";

/// Opaque external identifier of a graph item (e.g. `Q1234`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Read an ordinal literal as written by editors (`"4"`, `" 4"`, `"04"`)
pub fn parse_ordinal(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Value of a claim or qualifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FactValue {
    /// Reference to another item
    Item(ItemId),
    /// Literal value (strings, numbers, dates as written in the graph)
    Literal(String),
}

impl FactValue {
    pub fn item(id: impl Into<ItemId>) -> Self {
        Self::Item(id.into())
    }

    pub fn literal(s: impl ToString) -> Self {
        Self::Literal(s.to_string())
    }

    /// The referenced item, if this value is a reference
    pub fn as_item(&self) -> Option<&ItemId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Literal(_) => None,
        }
    }

    /// The ordinal held by a literal; references and non-numbers give `None`
    pub fn as_ordinal(&self) -> Option<u32> {
        match self {
            Self::Literal(raw) => parse_ordinal(raw),
            Self::Item(_) => None,
        }
    }
}

/// A single asserted value for a property, with optional qualifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub value: FactValue,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub qualifiers: HashMap<String, Vec<FactValue>>,
}

impl Claim {
    pub fn new(value: FactValue) -> Self {
        Self {
            value,
            qualifiers: HashMap::new(),
        }
    }

    /// Claim pointing at another item
    pub fn item(id: impl Into<ItemId>) -> Self {
        Self::new(FactValue::item(id))
    }

    /// Claim holding a literal
    pub fn literal(s: impl ToString) -> Self {
        Self::new(FactValue::literal(s))
    }

    pub fn with_qualifier(mut self, property: Property, value: FactValue) -> Self {
        self.qualifiers
            .entry(property.id.to_string())
            .or_default()
            .push(value);
        self
    }

    /// First value of a qualifier, if present
    pub fn qualifier(&self, property: Property) -> Option<&FactValue> {
        self.qualifiers.get(property.id).and_then(|values| values.first())
    }
}

/// A graph item as returned by the item store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    /// Labels keyed by language code
    #[serde(default)]
    pub labels: HashMap<String, String>,

    /// Claims keyed by property id
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            labels: HashMap::new(),
            claims: HashMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(LABEL_LANGUAGE.to_string(), label.into());
        self
    }

    pub fn with_claim(mut self, property: Property, claim: Claim) -> Self {
        self.claims
            .entry(property.id.to_string())
            .or_default()
            .push(claim);
        self
    }

    /// English label
    pub fn label(&self) -> Option<&str> {
        self.labels.get(LABEL_LANGUAGE).map(String::as_str)
    }

    pub fn has_claim(&self, property: Property) -> bool {
        self.claims
            .get(property.id)
            .is_some_and(|claims| !claims.is_empty())
    }

    /// First claim for a property; later claims are never consulted
    pub fn first_claim(&self, property: Property) -> Option<&Claim> {
        self.claims.get(property.id).and_then(|claims| claims.first())
    }
}
