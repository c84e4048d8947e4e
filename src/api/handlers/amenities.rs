//! CRUD handlers for Amenity resources.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{Amenity, AmenityId, AmenityUpdate, NewAmenity};
use crate::error::{AppError, Result};

/// `GET /amenities` - list all amenities.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub async fn list_amenities(State(app): State<AppState>) -> Result<Json<Vec<Amenity>>> {
    Ok(Json(app.storage.list_amenities().await?))
}

/// `GET /amenities/{amenity_id}` - get one amenity.
///
/// # Errors
///
/// Returns `NotFound` if no amenity with that id exists.
pub async fn get_amenity(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Amenity>> {
    let amenity_id: AmenityId = payload::path_id(&amenity_id)?;
    let amenity = app
        .storage
        .get_amenity(amenity_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(amenity))
}

/// `POST /amenities` - create an amenity.
///
/// # Errors
///
/// Returns `NotJson` for a malformed body and `Missing name` when the
/// required field is absent.
pub async fn create_amenity(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Amenity>)> {
    let map = payload::parse_object(&body)?;
    payload::require(&map, "name")?;
    let new_amenity: NewAmenity = payload::decode(map)?;

    let amenity = Amenity::create(new_amenity);
    app.storage.save_amenity(&amenity).await?;

    Ok((StatusCode::CREATED, Json(amenity)))
}

/// `PUT /amenities/{amenity_id}` - update an amenity.
///
/// # Errors
///
/// Returns `NotFound` if the amenity does not exist, `NotJson` for a
/// malformed body.
pub async fn update_amenity(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
    body: Bytes,
) -> Result<Json<Amenity>> {
    let amenity_id: AmenityId = payload::path_id(&amenity_id)?;
    let mut amenity = app
        .storage
        .get_amenity(amenity_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: AmenityUpdate = payload::decode(map)?;

    amenity.apply(update);
    app.storage.save_amenity(&amenity).await?;

    Ok(Json(amenity))
}

/// `DELETE /amenities/{amenity_id}` - delete an amenity.
///
/// # Errors
///
/// Returns `NotFound` if the amenity does not exist.
pub async fn delete_amenity(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Value>> {
    let amenity_id: AmenityId = payload::path_id(&amenity_id)?;
    if !app.storage.delete_amenity(amenity_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
