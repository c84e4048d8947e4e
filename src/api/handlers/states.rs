//! CRUD handlers for State resources.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{self, NewState, StateId, StateUpdate};
use crate::error::{AppError, Result};

/// `GET /states` - list all states.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub async fn list_states(State(app): State<AppState>) -> Result<Json<Vec<domain::State>>> {
    Ok(Json(app.storage.list_states().await?))
}

/// `GET /states/{state_id}` - get one state.
///
/// # Errors
///
/// Returns `NotFound` if no state with that id exists.
pub async fn get_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<domain::State>> {
    let state_id: StateId = payload::path_id(&state_id)?;
    let state = app
        .storage
        .get_state(state_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(state))
}

/// `POST /states` - create a state.
///
/// # Errors
///
/// Returns `NotJson` for a malformed body and `Missing name` when the
/// required field is absent.
pub async fn create_state(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<domain::State>)> {
    let map = payload::parse_object(&body)?;
    payload::require(&map, "name")?;
    let new_state: NewState = payload::decode(map)?;

    let state = domain::State::create(new_state);
    app.storage.save_state(&state).await?;

    Ok((StatusCode::CREATED, Json(state)))
}

/// `PUT /states/{state_id}` - update a state.
///
/// # Errors
///
/// Returns `NotFound` if the state does not exist, `NotJson` for a
/// malformed body.
pub async fn update_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> Result<Json<domain::State>> {
    let state_id: StateId = payload::path_id(&state_id)?;
    let mut state = app
        .storage
        .get_state(state_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: StateUpdate = payload::decode(map)?;

    state.apply(update);
    app.storage.save_state(&state).await?;

    Ok(Json(state))
}

/// `DELETE /states/{state_id}` - delete a state.
///
/// Deletion is shallow: cities under the state are orphaned, not removed.
///
/// # Errors
///
/// Returns `NotFound` if the state does not exist (a repeated delete is not
/// idempotent at the API level).
pub async fn delete_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Value>> {
    let state_id: StateId = payload::path_id(&state_id)?;
    if !app.storage.delete_state(state_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
