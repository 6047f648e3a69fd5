//! Wikidata property vocabulary used by the television model

use serde::Serialize;

/// A property identifier paired with its English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Property {
    pub id: &'static str,
    pub name: &'static str,
}

impl Property {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.name, self.id)
    }
}

pub const INSTANCE_OF: Property = Property::new("P31", "instance of");
pub const TITLE: Property = Property::new("P1476", "title");
pub const PART_OF_THE_SERIES: Property = Property::new("P179", "part of the series");
pub const SEASON: Property = Property::new("P4908", "season");
pub const ORIGINAL_NETWORK: Property = Property::new("P449", "original broadcaster");
pub const COUNTRY_OF_ORIGIN: Property = Property::new("P495", "country of origin");
pub const ORIGINAL_LANGUAGE: Property =
    Property::new("P364", "original language of film or TV show");
pub const PRODUCTION_COMPANY: Property = Property::new("P272", "production company");
pub const PUBLICATION_DATE: Property = Property::new("P577", "publication date");
pub const DIRECTOR: Property = Property::new("P57", "director");
pub const FOLLOWS: Property = Property::new("P155", "follows");
pub const FOLLOWED_BY: Property = Property::new("P156", "followed by");
pub const DURATION: Property = Property::new("P2047", "duration");
pub const IMDB_ID: Property = Property::new("P345", "IMDb ID");
pub const HAS_PART: Property = Property::new("P527", "has part(s)");
pub const NUMBER_OF_EPISODES: Property = Property::new("P1113", "number of episodes");

/// Qualifier holding an item's position within a series or season
pub const SERIES_ORDINAL: Property = Property::new("P1545", "series ordinal");

/// Properties expected to be inherited down the Series -> Season -> Episode chain
pub const INHERITABLE: [Property; 4] = [
    ORIGINAL_NETWORK,
    COUNTRY_OF_ORIGIN,
    ORIGINAL_LANGUAGE,
    PRODUCTION_COMPANY,
];
