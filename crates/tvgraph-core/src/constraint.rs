//! Data-quality constraints over television entities

use crate::entity::{Entity, EntityKind};
use crate::error::Result;
use crate::graph::GraphSession;
use crate::limits::MAX_INHERITANCE_DEPTH;
use crate::properties::{self as wp, Property};
use crate::relation::SequenceLink;
use crate::traversal::Resolver;
use serde::Serialize;

/// One rule checked against an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "target", rename_all = "snake_case")]
pub enum Constraint {
    /// The property is asserted on the entity itself
    HasFact(Property),
    /// The property is asserted on the entity or one of its ancestors
    InheritsFact(Property),
    /// The sequence link is asserted, whatever it points at
    RelationExists(SequenceLink),
}

/// Outcome of evaluating one constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintResult {
    pub constraint: String,
    pub passed: bool,
    pub message: String,
}

impl ConstraintResult {
    fn pass(constraint: &Constraint, message: String) -> Self {
        Self {
            constraint: constraint.name(),
            passed: true,
            message,
        }
    }

    fn fail(constraint: &Constraint, message: String) -> Self {
        Self {
            constraint: constraint.name(),
            passed: false,
            message,
        }
    }
}

impl Constraint {
    pub fn has_fact(property: Property) -> Self {
        Self::HasFact(property)
    }

    pub fn inherits_fact(property: Property) -> Self {
        Self::InheritsFact(property)
    }

    pub fn relation_exists(link: SequenceLink) -> Self {
        Self::RelationExists(link)
    }

    /// Stable identifier used in results, e.g. `has_fact(P31)`
    pub fn name(&self) -> String {
        match self {
            Self::HasFact(p) => format!("has_fact({})", p.id),
            Self::InheritsFact(p) => format!("inherits_fact({})", p.id),
            Self::RelationExists(SequenceLink::Follows) => "relation_exists(follows)".to_string(),
            Self::RelationExists(SequenceLink::IsFollowedBy) => {
                "relation_exists(is_followed_by)".to_string()
            }
        }
    }

    /// Evaluate against an entity
    ///
    /// A failing rule is an `Ok` result with `passed == false`; errors come
    /// only from lookups that cannot be performed.
    pub async fn evaluate(
        &self,
        entity: &Entity,
        session: &GraphSession,
    ) -> Result<ConstraintResult> {
        tracing::trace!("Evaluating {} on {}", self.name(), entity);

        match *self {
            Self::HasFact(property) => Ok(Self::check_present(self, entity, property)),
            Self::RelationExists(link) => Ok(Self::check_present(self, entity, link.property())),
            Self::InheritsFact(property) => self.check_inherited(entity, property, session).await,
        }
    }

    fn check_present(&self, entity: &Entity, property: Property) -> ConstraintResult {
        if entity.has_fact(property) {
            ConstraintResult::pass(self, format!("{} has property {}", entity, property))
        } else {
            ConstraintResult::fail(self, format!("{} is missing property {}", entity, property))
        }
    }

    async fn check_inherited(
        &self,
        entity: &Entity,
        property: Property,
        session: &GraphSession,
    ) -> Result<ConstraintResult> {
        let mut ancestor: Option<Entity> = None;

        for level in 0..MAX_INHERITANCE_DEPTH {
            let current = ancestor.as_ref().unwrap_or(entity);

            if current.has_fact(property) {
                let message = if level == 0 {
                    format!("{} has property {}", entity, property)
                } else {
                    format!("{} inherits property {} from {}", entity, property, current)
                };
                return Ok(ConstraintResult::pass(self, message));
            }

            // A missing parent link ends the chain; has_fact reports that gap separately.
            match current.kind().parent_link() {
                Some((link, _)) if current.has_fact(link) => {}
                _ => break,
            }
            if level + 1 == MAX_INHERITANCE_DEPTH {
                break;
            }

            let parent = Resolver::parent(current, session).await?;
            match parent {
                Some(parent) => ancestor = Some(parent),
                None => break,
            }
        }

        Ok(ConstraintResult::fail(
            self,
            format!(
                "{} is missing property {} and does not inherit it",
                entity, property
            ),
        ))
    }
}

const SERIES_FACTS: &[Property] = &[
    wp::INSTANCE_OF,
    wp::TITLE,
    wp::ORIGINAL_NETWORK,
    wp::COUNTRY_OF_ORIGIN,
    wp::ORIGINAL_LANGUAGE,
    wp::PRODUCTION_COMPANY,
    wp::IMDB_ID,
];

const SEASON_FACTS: &[Property] = &[
    wp::INSTANCE_OF,
    wp::PART_OF_THE_SERIES,
    wp::ORIGINAL_NETWORK,
    wp::COUNTRY_OF_ORIGIN,
    wp::ORIGINAL_LANGUAGE,
    wp::PRODUCTION_COMPANY,
    wp::HAS_PART,
    wp::NUMBER_OF_EPISODES,
];

const EPISODE_FACTS: &[Property] = &[
    wp::INSTANCE_OF,
    wp::TITLE,
    wp::PART_OF_THE_SERIES,
    wp::SEASON,
    wp::ORIGINAL_NETWORK,
    wp::COUNTRY_OF_ORIGIN,
    wp::ORIGINAL_LANGUAGE,
    wp::PRODUCTION_COMPANY,
    wp::PUBLICATION_DATE,
    wp::DIRECTOR,
    wp::DURATION,
    wp::IMDB_ID,
];

const SEQUENCE_LINKS: &[SequenceLink] = &[SequenceLink::Follows, SequenceLink::IsFollowedBy];
const NO_LINKS: &[SequenceLink] = &[];

const INHERITED_FACTS: &[Property] = &wp::INHERITABLE;
const NO_FACTS: &[Property] = &[];

impl EntityKind {
    /// Fixed, ordered rule list for this kind
    pub fn constraints(self) -> Vec<Constraint> {
        let (present, links, inherited) = match self {
            Self::Series => (SERIES_FACTS, NO_LINKS, NO_FACTS),
            Self::Season => (SEASON_FACTS, SEQUENCE_LINKS, INHERITED_FACTS),
            Self::Episode => (EPISODE_FACTS, SEQUENCE_LINKS, INHERITED_FACTS),
        };

        present
            .iter()
            .copied()
            .map(Constraint::HasFact)
            .chain(links.iter().copied().map(Constraint::RelationExists))
            .chain(inherited.iter().copied().map(Constraint::InheritsFact))
            .collect()
    }
}

/// Summary over a list of constraint results
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintReport {
    pub entity: String,
    pub results: Vec<ConstraintResult>,
}

impl ConstraintReport {
    pub fn new(entity: &Entity, results: Vec<ConstraintResult>) -> Self {
        Self {
            entity: entity.to_string(),
            results,
        }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConstraintResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Claim, Item};
    use crate::testing::{episode, season, series, FixtureGraph};

    #[tokio::test]
    async fn test_has_fact_names_missing_property() {
        let (session, _) = FixtureGraph::new().session();
        let entity = Entity::from_item(series("Q100").with_label("Example Show"), EntityKind::Series);

        let result = Constraint::has_fact(wp::INSTANCE_OF)
            .evaluate(&entity, &session)
            .await
            .unwrap();

        assert!(!result.passed);
        assert_eq!(result.constraint, "has_fact(P31)");
        assert!(result.message.contains("'instance of' (P31)"));
        assert!(result.message.contains("missing"));
    }

    #[tokio::test]
    async fn test_has_fact_passes() {
        let (session, _) = FixtureGraph::new().session();
        let item = series("Q100").with_claim(wp::INSTANCE_OF, Claim::item("Q5398426"));
        let entity = Entity::from_item(item, EntityKind::Series);

        let result = Constraint::has_fact(wp::INSTANCE_OF)
            .evaluate(&entity, &session)
            .await
            .unwrap();
        assert!(result.passed);
    }

    #[tokio::test]
    async fn test_relation_exists_ignores_target_validity() {
        let (session, _) = FixtureGraph::new().session();
        // Q999 is not in the store
        let item = episode("Q1", "Q10", 1).with_claim(wp::FOLLOWED_BY, Claim::item("Q999"));
        let entity = Entity::from_item(item, EntityKind::Episode);

        let forward = Constraint::relation_exists(SequenceLink::IsFollowedBy)
            .evaluate(&entity, &session)
            .await
            .unwrap();
        let backward = Constraint::relation_exists(SequenceLink::Follows)
            .evaluate(&entity, &session)
            .await
            .unwrap();

        assert!(forward.passed);
        assert!(!backward.passed);
        assert_eq!(backward.constraint, "relation_exists(follows)");
    }

    fn chain(network_on: Option<&str>) -> FixtureGraph {
        let with_network = |item: Item, id: &str| match network_on {
            Some(target) if target == id => {
                item.with_claim(wp::ORIGINAL_NETWORK, Claim::item("Q1000"))
            }
            _ => item,
        };
        FixtureGraph::new()
            .with_item(with_network(series("Q100"), "Q100"))
            .with_item(with_network(season("Q10", "Q100", 1), "Q10"))
            .with_item(with_network(episode("Q1", "Q10", 1), "Q1"))
    }

    async fn inherits_network(graph: FixtureGraph) -> ConstraintResult {
        let (session, _) = graph.session();
        let entity = Entity::from_identifier(&session, "Q1", EntityKind::Episode)
            .await
            .unwrap();
        Constraint::inherits_fact(wp::ORIGINAL_NETWORK)
            .evaluate(&entity, &session)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_inherits_fact_along_chain() {
        for holder in ["Q1", "Q10", "Q100"] {
            let result = inherits_network(chain(Some(holder))).await;
            assert!(result.passed, "expected pass with network on {}", holder);
        }

        let result = inherits_network(chain(Some("Q100"))).await;
        assert!(result.message.contains("Series(Q100)"));
    }

    #[tokio::test]
    async fn test_season_inherits_from_series() {
        let (session, graph) = chain(Some("Q100")).session();
        let entity = Entity::from_identifier(&session, "Q10", EntityKind::Season)
            .await
            .unwrap();

        let result = Constraint::inherits_fact(wp::ORIGINAL_NETWORK)
            .evaluate(&entity, &session)
            .await
            .unwrap();
        assert!(result.passed);
        assert_eq!(
            result.message,
            format!(
                "Season(Q10) inherits property {} from Series(Q100)",
                wp::ORIGINAL_NETWORK
            )
        );

        // Nothing on the season or the series: the walk ends at the series
        let missing = Constraint::inherits_fact(wp::COUNTRY_OF_ORIGIN)
            .evaluate(&entity, &session)
            .await
            .unwrap();
        assert!(!missing.passed);
        assert_eq!(graph.queries_issued(), 0);
    }

    #[tokio::test]
    async fn test_inherits_fact_fails_when_absent_everywhere() {
        let result = inherits_network(chain(None)).await;
        assert!(!result.passed);
        assert_eq!(result.constraint, "inherits_fact(P449)");
    }

    #[tokio::test]
    async fn test_inherits_fact_stops_at_missing_parent_link() {
        let (session, _) = FixtureGraph::new().session();
        let entity = Entity::from_item(Item::new("Q1"), EntityKind::Episode);

        let result = Constraint::inherits_fact(wp::COUNTRY_OF_ORIGIN)
            .evaluate(&entity, &session)
            .await
            .unwrap();
        assert!(!result.passed);
    }

    #[tokio::test]
    async fn test_inherits_fact_propagates_missing_parent_item() {
        // Season Q10 is referenced but not stored
        let (session, _) = FixtureGraph::new().session();
        let entity = Entity::from_item(episode("Q1", "Q10", 1), EntityKind::Episode);

        let result = Constraint::inherits_fact(wp::COUNTRY_OF_ORIGIN)
            .evaluate(&entity, &session)
            .await;
        assert!(matches!(result, Err(crate::Error::NotFound(_))));
    }

    #[test]
    fn test_kind_rule_lists() {
        let series_rules = EntityKind::Series.constraints();
        assert_eq!(series_rules.len(), 7);
        assert!(series_rules.iter().all(|c| matches!(c, Constraint::HasFact(_))));

        let episode_rules = EntityKind::Episode.constraints();
        assert_eq!(episode_rules[0], Constraint::HasFact(wp::INSTANCE_OF));
        assert!(episode_rules.contains(&Constraint::RelationExists(SequenceLink::Follows)));
        assert_eq!(
            episode_rules
                .iter()
                .filter(|c| matches!(c, Constraint::InheritsFact(_)))
                .count(),
            4
        );

        let season_rules = EntityKind::Season.constraints();
        assert!(season_rules.contains(&Constraint::HasFact(wp::NUMBER_OF_EPISODES)));
        assert!(!season_rules.contains(&Constraint::HasFact(wp::TITLE)));
    }

    #[tokio::test]
    async fn test_constraints_are_idempotent() {
        let (session, _) = chain(Some("Q100")).session();
        let entity = Entity::from_identifier(&session, "Q1", EntityKind::Episode)
            .await
            .unwrap();

        let first = entity.constraints(&session).await.unwrap();
        let second = entity.constraints(&session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), EntityKind::Episode.constraints().len());
    }

    #[tokio::test]
    async fn test_report_counts() {
        let (session, _) = FixtureGraph::new().session();
        let item = series("Q100")
            .with_claim(wp::INSTANCE_OF, Claim::item("Q5398426"))
            .with_claim(wp::TITLE, Claim::literal("Example Show"));
        let entity = Entity::from_item(item, EntityKind::Series);

        let report = ConstraintReport::new(&entity, entity.constraints(&session).await.unwrap());

        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 5);
        assert!(report
            .failures()
            .all(|r| r.message.starts_with("Series(Q100) is missing")));
    }
}
