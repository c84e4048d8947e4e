//! Status, stats, and readiness handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::api::state::AppState;
use crate::domain::EntityKind;
use crate::error::Result;

/// Liveness probe - always returns 200 if the service is running.
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// Live object counts per entity type, read straight from the backend.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub async fn stats(State(app): State<AppState>) -> Result<Json<Value>> {
    let mut counts = serde_json::Map::new();
    for kind in EntityKind::ALL {
        let count = app.storage.count(kind).await?;
        counts.insert(kind.collection().to_string(), Value::from(count));
    }
    Ok(Json(Value::Object(counts)))
}

/// Readiness probe - checks if the storage backend can serve requests.
pub async fn ready(State(app): State<AppState>) -> (StatusCode, Json<Value>) {
    let storage_ok = app.storage.health_check().await.is_ok();

    let status_code = if storage_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = Json(json!({
        "ready": storage_ok,
        "backend": app.storage.backend_name(),
    }));

    (status_code, response)
}
