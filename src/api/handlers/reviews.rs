//! CRUD handlers for Review resources.
//!
//! Reviews list and create under their parent place
//! (`/places/{place_id}/reviews`). Creation checks `user_id` presence and
//! validity before the remaining required field, so `Missing text` only
//! surfaces once the author has been resolved.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{NewReview, PlaceId, Review, ReviewId, ReviewUpdate, UserId};
use crate::error::{AppError, Result};

/// `GET /places/{place_id}/reviews` - list the reviews of a place.
///
/// # Errors
///
/// Returns `NotFound` if the parent place does not exist.
pub async fn list_reviews_for_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Review>>> {
    let place_id: PlaceId = payload::path_id(&place_id)?;
    app.storage
        .get_place(place_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(app.storage.list_reviews_by_place(place_id).await?))
}

/// `GET /reviews/{review_id}` - get one review.
///
/// # Errors
///
/// Returns `NotFound` if no review with that id exists.
pub async fn get_review(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Review>> {
    let review_id: ReviewId = payload::path_id(&review_id)?;
    let review = app
        .storage
        .get_review(review_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(review))
}

/// `POST /places/{place_id}/reviews` - create a review under a place.
///
/// The parent id comes from the path; a `place_id` in the body is ignored.
///
/// # Errors
///
/// Returns `NotFound` for a missing parent place or author user, `NotJson`
/// for a malformed body, `Missing user_id` / `Missing text` for absent
/// required fields, in that order.
pub async fn create_review(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Review>)> {
    let place_id: PlaceId = payload::path_id(&place_id)?;
    app.storage
        .get_place(place_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    payload::require(&map, "user_id")?;
    let user_id: UserId = payload::id_field(&map, "user_id")?;
    app.storage
        .get_user(user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    payload::require(&map, "text")?;
    let new_review: NewReview = payload::decode(map)?;

    let review = Review::create(place_id, new_review);
    app.storage.save_review(&review).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// `PUT /reviews/{review_id}` - update a review.
///
/// `place_id` and `user_id` are immutable; client-supplied values are
/// ignored.
///
/// # Errors
///
/// Returns `NotFound` if the review does not exist, `NotJson` for a
/// malformed body.
pub async fn update_review(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
    body: Bytes,
) -> Result<Json<Review>> {
    let review_id: ReviewId = payload::path_id(&review_id)?;
    let mut review = app
        .storage
        .get_review(review_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: ReviewUpdate = payload::decode(map)?;

    review.apply(update);
    app.storage.save_review(&review).await?;

    Ok(Json(review))
}

/// `DELETE /reviews/{review_id}` - delete a review.
///
/// # Errors
///
/// Returns `NotFound` if the review does not exist.
pub async fn delete_review(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>> {
    let review_id: ReviewId = payload::path_id(&review_id)?;
    if !app.storage.delete_review(review_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
