//! Integration tests for the placehub API.
//!
//! These tests spin up a real server instance and make HTTP requests to
//! verify the complete request/response cycle, including the fixed
//! validation order of the CRUD contract.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

use placehub::api::{AppState, create_router, into_service};
use placehub::config::{AppConfig, FileStorageConfig, ServerConfig, StorageBackend, StorageConfig};
use placehub::storage::create_storage;

// ============================================================================
// Test Harness
// ============================================================================

/// Test server instance.
struct TestServer {
    addr: SocketAddr,
    client: Client,
    _temp_dir: Option<TempDir>,
}

impl TestServer {
    /// Server over the memory backend.
    async fn new() -> Self {
        let storage = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        Self::with_storage(storage, None).await
    }

    /// Server over the file backend in a temporary directory.
    async fn with_file_backend() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = StorageConfig {
            backend: StorageBackend::File,
            file: FileStorageConfig {
                data_dir: temp_dir.path().to_path_buf(),
            },
            ..Default::default()
        };
        Self::with_storage(storage, Some(temp_dir)).await
    }

    async fn with_storage(storage_config: StorageConfig, temp_dir: Option<TempDir>) -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".parse().unwrap(),
                port: 0,
            },
            storage: storage_config,
            observability: Default::default(),
        };

        let storage = create_storage(&config.storage)
            .await
            .expect("Failed to create storage");

        let state = AppState::new(Arc::new(config), storage);
        let app = into_service(create_router(state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                .await
                .expect("Server failed");
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr,
            client: Client::new(),
            _temp_dir: temp_dir,
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn post_raw(&self, path: &str, body: &'static str) -> Response {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn put_raw(&self, path: &str, body: &'static str) -> Response {
        self.client
            .put(format!("{}{}", self.base_url(), path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Create a state and return its serialized form.
    async fn create_state(&self, name: &str) -> Value {
        let response = self.post("/states", &json!({ "name": name })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    /// Create a user and return its serialized form.
    async fn create_user(&self, email: &str) -> Value {
        let response = self
            .post("/users", &json!({ "email": email, "password": "secret" }))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    /// Create a state, a city under it, and return the city.
    async fn create_city(&self, name: &str) -> Value {
        let state = self.create_state("parent-of-city").await;
        let response = self
            .post(
                &format!("/states/{}/cities", state["id"].as_str().unwrap()),
                &json!({ "name": name }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    /// Create a full chain (state, city, user, place) and return the place.
    async fn create_place(&self, name: &str) -> Value {
        let city = self.create_city("city-of-place").await;
        let user = self.create_user(&format!("{name}@example.com")).await;
        let response = self
            .post(
                &format!("/cities/{}/places", city["id"].as_str().unwrap()),
                &json!({ "user_id": user["id"], "name": name }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }
}

async fn error_body(response: Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_string()
}

const MISSING_ID: &str = "00000000-0000-0000-0000-000000000000";

// ============================================================================
// Status / Stats / Ready
// ============================================================================

#[tokio::test]
async fn test_status_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/status").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_ready_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ready"], true);
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn test_stats_reflect_live_counts() {
    let server = TestServer::new().await;

    let response = server.get("/stats").await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "amenities": 0, "cities": 0, "places": 0,
            "reviews": 0, "states": 0, "users": 0
        })
    );

    let state = server.create_state("Utah").await;
    server.create_user("stats@example.com").await;

    let body: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(body["states"], 1);
    assert_eq!(body["users"], 1);

    server
        .delete(&format!("/states/{}", state["id"].as_str().unwrap()))
        .await;
    let body: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(body["states"], 0);
}

#[tokio::test]
async fn test_unknown_route_envelope() {
    let server = TestServer::new().await;
    let response = server
        .client
        .get(format!("http://{}/nope", server.addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(response).await, "Not Found");
}

// ============================================================================
// State CRUD
// ============================================================================

#[tokio::test]
async fn test_create_and_get_state() {
    let server = TestServer::new().await;

    let state = server.create_state("California").await;
    assert_eq!(state["name"], "California");
    assert!(state["id"].is_string());
    assert!(state["created_at"].is_string());
    assert!(state["updated_at"].is_string());

    let response = server
        .get(&format!("/states/{}", state["id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["id"], state["id"]);
    assert_eq!(fetched["name"], "California");
}

#[tokio::test]
async fn test_list_states() {
    let server = TestServer::new().await;

    let response = server.get("/states").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));

    server.create_state("A").await;
    server.create_state("B").await;

    let body: Value = server.get("/states").await.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_state_missing_name() {
    let server = TestServer::new().await;
    let response = server.post("/states", &json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing name");
}

#[tokio::test]
async fn test_create_state_invalid_json() {
    let server = TestServer::new().await;

    let response = server.post_raw("/states", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Not a JSON");

    // An empty body is just as malformed.
    let response = server
        .client
        .post(format!("{}/states", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Not a JSON");
}

#[tokio::test]
async fn test_get_nonexistent_state() {
    let server = TestServer::new().await;

    let response = server.get(&format!("/states/{MISSING_ID}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(response).await, "Not found");

    // An ill-formed id cannot name an entity either.
    let response = server.get("/states/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_state() {
    let server = TestServer::new().await;
    let state = server.create_state("Old Name").await;
    let id = state["id"].as_str().unwrap();

    let response = server
        .put(&format!("/states/{id}"), &json!({ "name": "New Name" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "New Name");
    assert_eq!(updated["id"], state["id"]);
    assert_eq!(updated["created_at"], state["created_at"]);
    let before = chrono::DateTime::parse_from_rfc3339(state["updated_at"].as_str().unwrap());
    let after = chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap());
    assert!(
        after.unwrap() > before.unwrap(),
        "updated_at must advance on PUT"
    );
}

#[tokio::test]
async fn test_update_ignores_server_managed_keys() {
    let server = TestServer::new().await;
    let state = server.create_state("Fixed").await;
    let id = state["id"].as_str().unwrap();

    let response = server
        .put(
            &format!("/states/{id}"),
            &json!({
                "id": MISSING_ID,
                "created_at": "1999-01-01T00:00:00Z",
                "name": "Renamed"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], state["id"]);
    assert_eq!(updated["created_at"], state["created_at"]);
    assert_eq!(updated["name"], "Renamed");
}

#[tokio::test]
async fn test_update_state_errors() {
    let server = TestServer::new().await;

    let response = server
        .put(&format!("/states/{MISSING_ID}"), &json!({ "name": "X" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let state = server.create_state("Y").await;
    let response = server
        .put_raw(
            &format!("/states/{}", state["id"].as_str().unwrap()),
            "not json at all",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Not a JSON");
}

#[tokio::test]
async fn test_delete_state_not_idempotent() {
    let server = TestServer::new().await;
    let state = server.create_state("Doomed").await;
    let id = state["id"].as_str().unwrap().to_string();

    let response = server.delete(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({}));

    // Gone for GET.
    let response = server.get(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete reports NotFound, not success.
    let response = server.delete(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_unique_across_creates() {
    let server = TestServer::new().await;
    let a = server.create_state("A").await;
    let b = server.create_state("B").await;
    let user = server.create_user("unique@example.com").await;

    assert_ne!(a["id"], b["id"]);
    assert_ne!(a["id"], user["id"]);
}

#[tokio::test]
async fn test_trailing_slash_accepted() {
    let server = TestServer::new().await;

    let response = server.post("/states/", &json!({ "name": "Slashed" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server.get("/states/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

// ============================================================================
// Nested Cities
// ============================================================================

#[tokio::test]
async fn test_create_city_under_state() {
    let server = TestServer::new().await;
    let state = server.create_state("Portugal").await;
    let state_id = state["id"].as_str().unwrap();

    // Empty body: parent exists, JSON parses, name missing.
    let response = server
        .post(&format!("/states/{state_id}/cities"), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing name");

    let response = server
        .post(
            &format!("/states/{state_id}/cities"),
            &json!({ "name": "Lisbon" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let city: Value = response.json().await.unwrap();
    assert_eq!(city["name"], "Lisbon");
    assert_eq!(city["state_id"].as_str().unwrap(), state_id);
}

#[tokio::test]
async fn test_city_parent_checked_before_body() {
    let server = TestServer::new().await;

    // Missing parent wins over a body that is not even JSON.
    let response = server
        .post_raw(&format!("/states/{MISSING_ID}/cities"), "{not json")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get(&format!("/states/{MISSING_ID}/cities")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_cities_scoped_to_state() {
    let server = TestServer::new().await;
    let state_a = server.create_state("A").await;
    let state_b = server.create_state("B").await;
    let id_a = state_a["id"].as_str().unwrap();
    let id_b = state_b["id"].as_str().unwrap();

    server
        .post(&format!("/states/{id_a}/cities"), &json!({ "name": "One" }))
        .await;
    server
        .post(&format!("/states/{id_b}/cities"), &json!({ "name": "Two" }))
        .await;

    let body: Value = server
        .get(&format!("/states/{id_a}/cities"))
        .await
        .json()
        .await
        .unwrap();
    let cities = body.as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["name"], "One");

    // An existing state with no cities lists empty, not an error.
    let state_c = server.create_state("C").await;
    let body: Value = server
        .get(&format!("/states/{}/cities", state_c["id"].as_str().unwrap()))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_city_state_id_immutable() {
    let server = TestServer::new().await;
    let city = server.create_city("Pinned").await;
    let city_id = city["id"].as_str().unwrap();

    let response = server
        .put(
            &format!("/cities/{city_id}"),
            &json!({ "state_id": MISSING_ID, "name": "Pinned Still" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["state_id"], city["state_id"]);
    assert_eq!(updated["name"], "Pinned Still");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_user_field_order() {
    let server = TestServer::new().await;

    let response = server.post("/users", &json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing email");

    let response = server
        .post("/users", &json!({ "email": "a@b.c" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing password");

    let response = server
        .post(
            "/users",
            &json!({ "email": "a@b.c", "password": "pw", "first_name": "Ada" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user: Value = response.json().await.unwrap();
    assert_eq!(user["email"], "a@b.c");
    assert_eq!(user["first_name"], "Ada");
}

#[tokio::test]
async fn test_user_email_immutable() {
    let server = TestServer::new().await;
    let user = server.create_user("fixed@example.com").await;
    let id = user["id"].as_str().unwrap();

    let response = server
        .put(
            &format!("/users/{id}"),
            &json!({ "email": "new@x.com", "first_name": "Kim" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["email"], "fixed@example.com");
    assert_eq!(updated["first_name"], "Kim");
}

// ============================================================================
// Amenities
// ============================================================================

#[tokio::test]
async fn test_amenity_crud() {
    let server = TestServer::new().await;

    let response = server.post("/amenities", &json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing name");

    let response = server.post("/amenities", &json!({ "name": "wifi" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let amenity: Value = response.json().await.unwrap();
    let id = amenity["id"].as_str().unwrap();

    let response = server
        .put(&format!("/amenities/{id}"), &json!({ "name": "parking" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.delete(&format!("/amenities/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get(&format!("/amenities/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Places — validation order
// ============================================================================

#[tokio::test]
async fn test_create_place_validation_order() {
    let server = TestServer::new().await;
    let city = server.create_city("Host City").await;
    let city_id = city["id"].as_str().unwrap();

    // 1. Missing parent city wins over everything.
    let response = server
        .post(&format!("/cities/{MISSING_ID}/places"), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // 2. Malformed body.
    let response = server
        .post_raw(&format!("/cities/{city_id}/places"), "{not json")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Not a JSON");

    // 3. user_id presence before anything else in the body.
    let response = server
        .post(&format!("/cities/{city_id}/places"), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing user_id");

    // 4. Dangling user_id is NotFound even though name is also missing.
    let response = server
        .post(
            &format!("/cities/{city_id}/places"),
            &json!({ "user_id": MISSING_ID }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(response).await, "Not found");

    // 5. With a real owner, the remaining required field is reported.
    let user = server.create_user("owner@example.com").await;
    let response = server
        .post(
            &format!("/cities/{city_id}/places"),
            &json!({ "user_id": user["id"] }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing name");

    // 6. Fully valid create.
    let response = server
        .post(
            &format!("/cities/{city_id}/places"),
            &json!({ "user_id": user["id"], "name": "Sea Shack" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let place: Value = response.json().await.unwrap();
    assert_eq!(place["city_id"].as_str().unwrap(), city_id);
    assert_eq!(place["user_id"], user["id"]);
}

#[tokio::test]
async fn test_place_free_form_attributes() {
    let server = TestServer::new().await;
    let city = server.create_city("Bag City").await;
    let user = server.create_user("bag@example.com").await;
    let city_id = city["id"].as_str().unwrap();

    let response = server
        .post(
            &format!("/cities/{city_id}/places"),
            &json!({
                "user_id": user["id"],
                "name": "Loft",
                "price_by_night": 120,
                "max_guest": 3,
                // A body city_id must not override the path parent.
                "city_id": MISSING_ID
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let place: Value = response.json().await.unwrap();
    assert_eq!(place["price_by_night"], 120);
    assert_eq!(place["max_guest"], 3);
    assert_eq!(place["city_id"].as_str().unwrap(), city_id);

    // Updates pass new bag keys through and keep the parents pinned.
    let place_id = place["id"].as_str().unwrap();
    let response = server
        .put(
            &format!("/places/{place_id}"),
            &json!({ "capacity": 6, "user_id": MISSING_ID }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["capacity"], 6);
    assert_eq!(updated["price_by_night"], 120);
    assert_eq!(updated["user_id"], user["id"]);
}

// ============================================================================
// Reviews — validation order
// ============================================================================

#[tokio::test]
async fn test_create_review_validation_order() {
    let server = TestServer::new().await;
    let place = server.create_place("Reviewed Place").await;
    let place_id = place["id"].as_str().unwrap();

    let response = server
        .post(&format!("/places/{MISSING_ID}/reviews"), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server
        .post(&format!("/places/{place_id}/reviews"), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing user_id");

    // Author must resolve before text is even looked at.
    let response = server
        .post(
            &format!("/places/{place_id}/reviews"),
            &json!({ "user_id": MISSING_ID }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let reviewer = server.create_user("reviewer@example.com").await;
    let response = server
        .post(
            &format!("/places/{place_id}/reviews"),
            &json!({ "user_id": reviewer["id"] }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await, "Missing text");

    let response = server
        .post(
            &format!("/places/{place_id}/reviews"),
            &json!({ "user_id": reviewer["id"], "text": "Lovely" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let review: Value = response.json().await.unwrap();
    assert_eq!(review["place_id"].as_str().unwrap(), place_id);
    assert_eq!(review["text"], "Lovely");

    let body: Value = server
        .get(&format!("/places/{place_id}/reviews"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_review_text_updatable_author_not() {
    let server = TestServer::new().await;
    let place = server.create_place("Place").await;
    let reviewer = server.create_user("author@example.com").await;
    let response = server
        .post(
            &format!("/places/{}/reviews", place["id"].as_str().unwrap()),
            &json!({ "user_id": reviewer["id"], "text": "First draft" }),
        )
        .await;
    let review: Value = response.json().await.unwrap();
    let review_id = review["id"].as_str().unwrap();

    let response = server
        .put(
            &format!("/reviews/{review_id}"),
            &json!({ "text": "Second draft", "user_id": MISSING_ID }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["text"], "Second draft");
    assert_eq!(updated["user_id"], reviewer["id"]);
}

// ============================================================================
// Shallow delete / orphans
// ============================================================================

#[tokio::test]
async fn test_shallow_delete_orphans_children() {
    let server = TestServer::new().await;
    let place = server.create_place("Orphaned Place").await;
    let place_id = place["id"].as_str().unwrap();
    let city_id = place["city_id"].as_str().unwrap().to_string();

    let response = server.delete(&format!("/cities/{city_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The place survives, reachable by id.
    let response = server.get(&format!("/places/{place_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // But the parent traversal is gone with the parent.
    let response = server.get(&format!("/cities/{city_id}/places")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// File backend smoke test
// ============================================================================

#[tokio::test]
async fn test_file_backend_end_to_end() {
    let server = TestServer::with_file_backend().await;

    let body: Value = server.get("/ready").await.json().await.unwrap();
    assert_eq!(body["backend"], "file");

    let state = server.create_state("Persisted").await;
    let id = state["id"].as_str().unwrap();

    let response = server.get(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = server
        .put(&format!("/states/{id}"), &json!({ "name": "Persisted v2" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(body["states"], 1);

    let response = server.delete(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = server.get(&format!("/states/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
