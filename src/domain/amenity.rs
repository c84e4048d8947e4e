//! Amenity — a named feature a place can offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::AmenityId;

/// A named amenity (wifi, parking, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    /// Construct a fresh amenity with a server-assigned id and timestamps.
    #[must_use]
    pub fn create(payload: NewAmenity) -> Self {
        let now = Utc::now();
        Self {
            id: AmenityId::new(),
            name: payload.name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    pub fn apply(&mut self, update: AmenityUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// Client payload for creating an amenity.
#[derive(Debug, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

/// Updatable fields for an amenity.
#[derive(Debug, Default, Deserialize)]
pub struct AmenityUpdate {
    pub name: Option<String>,
}
