//! CRUD handlers for City resources.
//!
//! Cities list and create under their parent state
//! (`/states/{state_id}/cities`); lookup, update, and delete address the
//! city directly.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{City, CityId, CityUpdate, NewCity, StateId};
use crate::error::{AppError, Result};

/// `GET /states/{state_id}/cities` - list the cities of a state.
///
/// # Errors
///
/// Returns `NotFound` if the parent state does not exist. An existing state
/// with no cities yields an empty list, not an error.
pub async fn list_cities_in_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Vec<City>>> {
    let state_id: StateId = payload::path_id(&state_id)?;
    app.storage
        .get_state(state_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(app.storage.list_cities_by_state(state_id).await?))
}

/// `GET /cities/{city_id}` - get one city.
///
/// # Errors
///
/// Returns `NotFound` if no city with that id exists.
pub async fn get_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<City>> {
    let city_id: CityId = payload::path_id(&city_id)?;
    let city = app
        .storage
        .get_city(city_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(city))
}

/// `POST /states/{state_id}/cities` - create a city under a state.
///
/// The parent id comes from the path; a `state_id` in the body is ignored.
///
/// # Errors
///
/// Returns `NotFound` for a missing parent (checked before the body),
/// `NotJson` for a malformed body, `Missing name` for the required field.
pub async fn create_city(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<City>)> {
    let state_id: StateId = payload::path_id(&state_id)?;
    app.storage
        .get_state(state_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    payload::require(&map, "name")?;
    let new_city: NewCity = payload::decode(map)?;

    let city = City::create(state_id, new_city);
    app.storage.save_city(&city).await?;

    Ok((StatusCode::CREATED, Json(city)))
}

/// `PUT /cities/{city_id}` - update a city.
///
/// `state_id` is immutable; a client-supplied value is ignored.
///
/// # Errors
///
/// Returns `NotFound` if the city does not exist, `NotJson` for a
/// malformed body.
pub async fn update_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> Result<Json<City>> {
    let city_id: CityId = payload::path_id(&city_id)?;
    let mut city = app
        .storage
        .get_city(city_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: CityUpdate = payload::decode(map)?;

    city.apply(update);
    app.storage.save_city(&city).await?;

    Ok(Json(city))
}

/// `DELETE /cities/{city_id}` - delete a city.
///
/// Deletion is shallow: places under the city are orphaned, not removed.
///
/// # Errors
///
/// Returns `NotFound` if the city does not exist.
pub async fn delete_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Value>> {
    let city_id: CityId = payload::path_id(&city_id)?;
    if !app.storage.delete_city(city_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
