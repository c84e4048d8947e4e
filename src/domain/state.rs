//! State — a top-level region that owns a collection of cities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::StateId;

/// A top-level region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl State {
    /// Construct a fresh state with a server-assigned id and timestamps.
    #[must_use]
    pub fn create(payload: NewState) -> Self {
        let now = Utc::now();
        Self {
            id: StateId::new(),
            name: payload.name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// Client payload for creating a state.
///
/// Server-managed fields (`id`, timestamps) supplied by the client are
/// ignored by deserialization.
#[derive(Debug, Deserialize)]
pub struct NewState {
    pub name: String,
}

/// Updatable fields for a state. Fields absent from this struct are
/// immutable through the API.
#[derive(Debug, Default, Deserialize)]
pub struct StateUpdate {
    pub name: Option<String>,
}
