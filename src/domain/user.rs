//! User — an account that owns places and authors reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::UserId;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Construct a fresh user with a server-assigned id and timestamps.
    #[must_use]
    pub fn create(payload: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    ///
    /// `email` is fixed at creation; it is deliberately absent from
    /// [`UserUpdate`], so a client-supplied value is dropped on the floor.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            self.last_name = Some(last_name);
        }
        self.updated_at = Utc::now();
    }
}

/// Client payload for creating a user.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Updatable fields for a user. Note the absence of `email`.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
