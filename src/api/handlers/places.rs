//! CRUD handlers for Place resources.
//!
//! Places list and create under their parent city
//! (`/cities/{city_id}/places`). Creation validates in the contract's fixed
//! order: parent city, body syntax, `user_id` presence, owner existence,
//! then the remaining required fields — so a dangling `user_id` is 404 even
//! when `name` is also missing.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{CityId, NewPlace, Place, PlaceId, PlaceUpdate, UserId};
use crate::error::{AppError, Result};

/// `GET /cities/{city_id}/places` - list the places of a city.
///
/// # Errors
///
/// Returns `NotFound` if the parent city does not exist.
pub async fn list_places_in_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<Place>>> {
    let city_id: CityId = payload::path_id(&city_id)?;
    app.storage
        .get_city(city_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(app.storage.list_places_by_city(city_id).await?))
}

/// `GET /places/{place_id}` - get one place.
///
/// # Errors
///
/// Returns `NotFound` if no place with that id exists.
pub async fn get_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Place>> {
    let place_id: PlaceId = payload::path_id(&place_id)?;
    let place = app
        .storage
        .get_place(place_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(place))
}

/// `POST /cities/{city_id}/places` - create a place under a city.
///
/// The parent id comes from the path; a `city_id` in the body is ignored.
/// Free-form attributes beyond the declared fields are carried through.
///
/// # Errors
///
/// Returns `NotFound` for a missing parent city or owner user, `NotJson`
/// for a malformed body, `Missing user_id` / `Missing name` for absent
/// required fields, in that order.
pub async fn create_place(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Place>)> {
    let city_id: CityId = payload::path_id(&city_id)?;
    app.storage
        .get_city(city_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    payload::require(&map, "user_id")?;
    let user_id: UserId = payload::id_field(&map, "user_id")?;
    app.storage
        .get_user(user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    payload::require(&map, "name")?;
    let new_place: NewPlace = payload::decode(map)?;

    let place = Place::create(city_id, new_place);
    app.storage.save_place(&place).await?;

    Ok((StatusCode::CREATED, Json(place)))
}

/// `PUT /places/{place_id}` - update a place.
///
/// `city_id` and `user_id` are immutable; client-supplied values are
/// ignored. Unknown keys update the free-form bag.
///
/// # Errors
///
/// Returns `NotFound` if the place does not exist, `NotJson` for a
/// malformed body.
pub async fn update_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<Json<Place>> {
    let place_id: PlaceId = payload::path_id(&place_id)?;
    let mut place = app
        .storage
        .get_place(place_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: PlaceUpdate = payload::decode(map)?;

    place.apply(update);
    app.storage.save_place(&place).await?;

    Ok(Json(place))
}

/// `DELETE /places/{place_id}` - delete a place.
///
/// Deletion is shallow: reviews under the place are orphaned, not removed.
///
/// # Errors
///
/// Returns `NotFound` if the place does not exist.
pub async fn delete_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Value>> {
    let place_id: PlaceId = payload::path_id(&place_id)?;
    if !app.storage.delete_place(place_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
