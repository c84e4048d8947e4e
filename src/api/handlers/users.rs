//! CRUD handlers for User resources.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

use crate::api::payload;
use crate::api::state::AppState;
use crate::domain::{NewUser, User, UserId, UserUpdate};
use crate::error::{AppError, Result};

/// `GET /users` - list all users.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub async fn list_users(State(app): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(app.storage.list_users().await?))
}

/// `GET /users/{user_id}` - get one user.
///
/// # Errors
///
/// Returns `NotFound` if no user with that id exists.
pub async fn get_user(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    let user_id: UserId = payload::path_id(&user_id)?;
    let user = app
        .storage
        .get_user(user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

/// `POST /users` - create a user.
///
/// Required fields are checked in declared order: `email`, then `password`.
///
/// # Errors
///
/// Returns `NotJson` for a malformed body, `Missing email` /
/// `Missing password` for absent required fields.
pub async fn create_user(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>)> {
    let map = payload::parse_object(&body)?;
    payload::require(&map, "email")?;
    payload::require(&map, "password")?;
    let new_user: NewUser = payload::decode(map)?;

    let user = User::create(new_user);
    app.storage.save_user(&user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /users/{user_id}` - update a user.
///
/// `email` is immutable after creation; a client-supplied value is ignored
/// and the stored address is returned unchanged.
///
/// # Errors
///
/// Returns `NotFound` if the user does not exist, `NotJson` for a
/// malformed body.
pub async fn update_user(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<Json<User>> {
    let user_id: UserId = payload::path_id(&user_id)?;
    let mut user = app
        .storage
        .get_user(user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let map = payload::parse_object(&body)?;
    let update: UserUpdate = payload::decode(map)?;

    user.apply(update);
    app.storage.save_user(&user).await?;

    Ok(Json(user))
}

/// `DELETE /users/{user_id}` - delete a user.
///
/// Deletion is shallow: the user's places and reviews are orphaned, not
/// removed.
///
/// # Errors
///
/// Returns `NotFound` if the user does not exist.
pub async fn delete_user(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>> {
    let user_id: UserId = payload::path_id(&user_id)?;
    if !app.storage.delete_user(user_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({})))
}
