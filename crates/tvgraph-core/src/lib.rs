//! tvgraph Core - Series, Season and Episode over a knowledge graph
//!
//! This crate provides the entity model, the data-quality constraints and
//! the parent/successor resolver, plus the collaborator traits that storage
//! backends implement.

pub mod constraint;
pub mod entity;
pub mod error;
pub mod graph;
pub mod item;
pub mod limits;
pub mod properties;
pub mod query;
pub mod relation;
pub mod traversal;

#[cfg(test)]
pub(crate) mod testing;

pub use constraint::{Constraint, ConstraintReport, ConstraintResult};
pub use entity::{Entity, EntityKind};
pub use error::{Error, Result};
pub use graph::{GraphSession, ItemStore, ItemStream, QueryService};
pub use item::{Claim, FactValue, Item, ItemId};
pub use properties::Property;
pub use query::{Condition, ItemQuery};
pub use relation::SequenceLink;
pub use traversal::{Resolver, Strategy, Successor};
