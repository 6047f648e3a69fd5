//! Query types for selecting items from the graph-query service

use crate::item::{FactValue, Item, ItemId};
use crate::properties::Property;
use serde::Serialize;

/// A single condition an item must satisfy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Some claim for `property` has `value`
    FactEquals { property: Property, value: FactValue },

    /// Some claim for `property` carries a `qualifier` reading as `ordinal`
    ///
    /// Qualifier literals are compared as numbers, so `" 4"` and `"04"` match 4.
    OrdinalEquals {
        property: Property,
        qualifier: Property,
        ordinal: u32,
    },
}

impl Condition {
    /// Evaluate this condition against an item
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::FactEquals { property, value } => item
                .claims
                .get(property.id)
                .is_some_and(|claims| claims.iter().any(|c| &c.value == value)),
            Self::OrdinalEquals {
                property,
                qualifier,
                ordinal,
            } => item.claims.get(property.id).is_some_and(|claims| {
                claims.iter().any(|c| {
                    c.qualifiers.get(qualifier.id).is_some_and(|values| {
                        values.iter().any(|v| v.as_ordinal() == Some(*ordinal))
                    })
                })
            }),
        }
    }
}

/// Query builder: "items where fact X = value Y [and fact Z = value W]"
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemQuery {
    pub conditions: Vec<Condition>,
}

impl ItemQuery {
    /// Create an empty query (matches every item)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a claim pointing at `target`
    pub fn with_reference(self, property: Property, target: &ItemId) -> Self {
        self.with_fact(property, FactValue::Item(target.clone()))
    }

    /// Require a claim with the given value
    pub fn with_fact(mut self, property: Property, value: FactValue) -> Self {
        self.conditions
            .push(Condition::FactEquals { property, value });
        self
    }

    /// Require a claim of `property` whose `qualifier` holds `ordinal`
    pub fn with_ordinal(mut self, property: Property, qualifier: Property, ordinal: u32) -> Self {
        self.conditions.push(Condition::OrdinalEquals {
            property,
            qualifier,
            ordinal,
        });
        self
    }

    /// True if the item satisfies every condition
    pub fn matches(&self, item: &Item) -> bool {
        self.conditions.iter().all(|c| c.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Claim;
    use crate::properties::{FOLLOWS, PART_OF_THE_SERIES, SEASON, SERIES_ORDINAL};

    fn episode(id: &str, season: &str, ordinal: u32) -> Item {
        Item::new(id)
            .with_claim(PART_OF_THE_SERIES, Claim::item("Q100"))
            .with_claim(
                SEASON,
                Claim::item(season).with_qualifier(SERIES_ORDINAL, FactValue::literal(ordinal)),
            )
    }

    #[test]
    fn test_query_builder() {
        let query = ItemQuery::new()
            .with_reference(PART_OF_THE_SERIES, &ItemId::from("Q100"))
            .with_ordinal(SEASON, SERIES_ORDINAL, 4);

        assert_eq!(query.conditions.len(), 2);
        assert!(matches!(
            query.conditions[0],
            Condition::FactEquals { property, .. } if property == PART_OF_THE_SERIES
        ));
    }

    #[test]
    fn test_matches_all_conditions() {
        let item = episode("Q2", "Q10", 4);

        let query = ItemQuery::new()
            .with_reference(SEASON, &ItemId::from("Q10"))
            .with_ordinal(SEASON, SERIES_ORDINAL, 4);
        assert!(query.matches(&item));

        let wrong_ordinal = ItemQuery::new()
            .with_reference(SEASON, &ItemId::from("Q10"))
            .with_ordinal(SEASON, SERIES_ORDINAL, 5);
        assert!(!wrong_ordinal.matches(&item));

        let wrong_season = ItemQuery::new().with_reference(SEASON, &ItemId::from("Q11"));
        assert!(!wrong_season.matches(&item));
    }

    #[test]
    fn test_ordinal_matches_padded_literals() {
        let padded = Item::new("Q2").with_claim(
            SEASON,
            Claim::item("Q10").with_qualifier(SERIES_ORDINAL, FactValue::literal(" 04")),
        );
        let query = ItemQuery::new().with_ordinal(SEASON, SERIES_ORDINAL, 4);
        assert!(query.matches(&padded));

        let unreadable = Item::new("Q3").with_claim(
            SEASON,
            Claim::item("Q10").with_qualifier(SERIES_ORDINAL, FactValue::literal("fourth")),
        );
        assert!(!query.matches(&unreadable));
    }

    #[test]
    fn test_missing_property_never_matches() {
        let item = episode("Q2", "Q10", 4);
        let query = ItemQuery::new().with_reference(FOLLOWS, &ItemId::from("Q1"));
        assert!(!query.matches(&item));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(ItemQuery::new().matches(&Item::new("Q1")));
    }
}
