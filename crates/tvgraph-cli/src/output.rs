//! Output formatting utilities

use serde::Serialize;
use tvgraph_core::{Claim, Entity, EntityKind, ItemId};

use std::collections::BTreeMap;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Serializable view of an entity
#[derive(Debug, Serialize)]
pub struct EntityView<'a> {
    pub id: &'a ItemId,
    pub kind: EntityKind,
    pub label: Option<&'a str>,
    /// Claims in property order
    pub facts: BTreeMap<&'a str, &'a [Claim]>,
}

impl<'a> From<&'a Entity> for EntityView<'a> {
    fn from(entity: &'a Entity) -> Self {
        Self {
            id: entity.id(),
            kind: entity.kind(),
            label: entity.label(),
            facts: entity
                .facts()
                .iter()
                .map(|(property, claims)| (property.as_str(), claims.as_slice()))
                .collect(),
        }
    }
}

/// Serialize data as pretty JSON
pub fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
