//! City — a region subdivision, parented to a state, owning places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{CityId, StateId};

/// A city inside a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    /// Construct a fresh city under `state_id`.
    ///
    /// The parent id always comes from the route, never from the body.
    #[must_use]
    pub fn create(state_id: StateId, payload: NewCity) -> Self {
        let now = Utc::now();
        Self {
            id: CityId::new(),
            name: payload.name,
            state_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    ///
    /// `state_id` is set at creation and cannot be changed here.
    pub fn apply(&mut self, update: CityUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// Client payload for creating a city.
#[derive(Debug, Deserialize)]
pub struct NewCity {
    pub name: String,
}

/// Updatable fields for a city.
#[derive(Debug, Default, Deserialize)]
pub struct CityUpdate {
    pub name: Option<String>,
}
