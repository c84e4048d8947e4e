//! Entity kinds — the closed set of persisted object types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six persisted entity types.
///
/// Used wherever the storage layer needs to address objects by type rather
/// than through a typed method: the `/stats` counters, file-backend
/// subdirectories, and the postgres `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    State,
    City,
    Amenity,
    User,
    Place,
    Review,
}

impl EntityKind {
    /// All kinds, ordered by collection key for stable `/stats` output.
    pub const ALL: [Self; 6] = [
        Self::Amenity,
        Self::City,
        Self::Place,
        Self::Review,
        Self::State,
        Self::User,
    ];

    /// Singular type name, used as the storage discriminator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::City => "city",
            Self::Amenity => "amenity",
            Self::User => "user",
            Self::Place => "place",
            Self::Review => "review",
        }
    }

    /// Plural collection key, as exposed by `/stats` and used for file
    /// backend subdirectories.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::State => "states",
            Self::City => "cities",
            Self::Amenity => "amenities",
            Self::User => "users",
            Self::Place => "places",
            Self::Review => "reviews",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
