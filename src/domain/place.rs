//! Place — a lodging listing, parented to a city and owned by a user.
//!
//! Place is the one entity carrying a free-form attribute bag (price,
//! location, capacity, …). The bag is flattened into the JSON
//! representation; server-reserved keys are stripped before they can reach
//! it, so the pass-through cannot shadow server-managed or immutable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::id::{CityId, PlaceId, UserId};

/// Keys the free-form bag may never carry.
const RESERVED_KEYS: [&str; 5] = ["id", "city_id", "user_id", "created_at", "updated_at"];

/// A lodging listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub city_id: CityId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Untyped pass-through attributes (price, location, capacity, …).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    /// Construct a fresh place under `city_id`.
    ///
    /// The parent id always comes from the route, never from the body.
    #[must_use]
    pub fn create(city_id: CityId, payload: NewPlace) -> Self {
        let now = Utc::now();
        Self {
            id: PlaceId::new(),
            name: payload.name,
            city_id,
            user_id: payload.user_id,
            description: payload.description,
            extra: strip_reserved(payload.extra),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    ///
    /// `city_id` and `user_id` are fixed at creation; they have no slot in
    /// [`PlaceUpdate`] and are filtered out of the bag.
    pub fn apply(&mut self, update: PlaceUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        for (key, value) in strip_reserved(update.extra) {
            self.extra.insert(key, value);
        }
        self.updated_at = Utc::now();
    }
}

fn strip_reserved(mut bag: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        bag.remove(key);
    }
    bag
}

/// Client payload for creating a place.
#[derive(Debug, Deserialize)]
pub struct NewPlace {
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Updatable fields for a place.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
