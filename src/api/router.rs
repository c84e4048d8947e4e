//! Router setup and configuration.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{amenities, cities, places, reviews, states, status, users};
use crate::api::state::AppState;

/// Create the main application router.
///
/// All resource routes live under `/api/v1`. List and create are nested
/// under the parent collection for cities, places, and reviews; every kind
/// is addressable by id at the top level.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/status", get(status::status))
        .route("/stats", get(status::stats))
        .route("/ready", get(status::ready))
        .route(
            "/states",
            get(states::list_states).post(states::create_state),
        )
        .route(
            "/states/{state_id}",
            get(states::get_state)
                .put(states::update_state)
                .delete(states::delete_state),
        )
        .route(
            "/states/{state_id}/cities",
            get(cities::list_cities_in_state).post(cities::create_city),
        )
        .route(
            "/cities/{city_id}",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
        .route(
            "/cities/{city_id}/places",
            get(places::list_places_in_city).post(places::create_place),
        )
        .route(
            "/amenities",
            get(amenities::list_amenities).post(amenities::create_amenity),
        )
        .route(
            "/amenities/{amenity_id}",
            get(amenities::get_amenity)
                .put(amenities::update_amenity)
                .delete(amenities::delete_amenity),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/places/{place_id}",
            get(places::get_place)
                .put(places::update_place)
                .delete(places::delete_place),
        )
        .route(
            "/places/{place_id}/reviews",
            get(reviews::list_reviews_for_place).post(reviews::create_review),
        )
        .route(
            "/reviews/{review_id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        );

    Router::new()
        .nest("/api/v1", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Wrap the router so `/states/` and `/states` hit the same route.
///
/// The normalization layer has to sit outside the router, so callers serve
/// the returned service instead of the bare [`Router`].
pub fn into_service(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Catch-all for unmatched paths.
async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
