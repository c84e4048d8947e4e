//! Review — a user-authored text review of a place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{PlaceId, ReviewId, UserId};

/// A review of a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub text: String,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Construct a fresh review under `place_id`.
    ///
    /// The parent id always comes from the route, never from the body.
    #[must_use]
    pub fn create(place_id: PlaceId, payload: NewReview) -> Self {
        let now = Utc::now();
        Self {
            id: ReviewId::new(),
            text: payload.text,
            place_id,
            user_id: payload.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a client update and advance `updated_at`.
    ///
    /// `place_id` and `user_id` are fixed at creation.
    pub fn apply(&mut self, update: ReviewUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
        self.updated_at = Utc::now();
    }
}

/// Client payload for creating a review.
#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub user_id: UserId,
    pub text: String,
}

/// Updatable fields for a review.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewUpdate {
    pub text: Option<String>,
}
