//! Sequence relations between siblings

use crate::properties::{Property, FOLLOWED_BY, FOLLOWS};
use serde::{Deserialize, Serialize};

/// Direction of a sequence link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceLink {
    /// The entity names its predecessor
    Follows,
    /// The entity names its successor
    IsFollowedBy,
}

impl SequenceLink {
    /// Property carrying this link
    pub fn property(self) -> Property {
        match self {
            Self::Follows => FOLLOWS,
            Self::IsFollowedBy => FOLLOWED_BY,
        }
    }
}
