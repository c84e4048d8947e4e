//! `PostgreSQL` storage backend.
//!
//! All six entity kinds share one generic `objects` table keyed by
//! `(kind, id)` with the serialized entity in a JSONB column. Relationship
//! queries filter on the parent id inside the JSON payload. The table is
//! created on startup when absent.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use uuid::Uuid;

use crate::config::PostgresStorageConfig;
use crate::domain::{
    Amenity, AmenityId, City, CityId, EntityKind, Place, PlaceId, Review, ReviewId, State, StateId,
    User, UserId,
};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{
    AmenityStore, CityStore, ObjectStore, PlaceStore, ReviewStore, StateStore, UserStore,
};

const CREATE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS objects (
    kind        TEXT NOT NULL,
    id          UUID NOT NULL,
    data        JSONB NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL,
    PRIMARY KEY (kind, id)
)";

const UPSERT: &str = r"
INSERT INTO objects (kind, id, data, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (kind, id)
DO UPDATE SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at";

/// `PostgreSQL` storage implementation.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema cannot be created.
    pub async fn connect(config: &PostgresStorageConfig) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn upsert<T: serde::Serialize>(
        &self,
        kind: EntityKind,
        id: Uuid,
        object: &T,
        created_at: chrono::DateTime<chrono::Utc>,
        updated_at: chrono::DateTime<chrono::Utc>,
    ) -> StorageResult<()> {
        let data = serde_json::to_value(object)?;
        sqlx::query(UPSERT)
            .bind(kind.as_str())
            .bind(id)
            .bind(data)
            .bind(created_at)
            .bind(updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: Uuid,
    ) -> StorageResult<Option<T>> {
        let row = sqlx::query("SELECT data FROM objects WHERE kind = $1 AND id = $2")
            .bind(kind.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| decode_data(&row)).transpose()
    }

    async fn fetch_all<T: serde::de::DeserializeOwned>(
        &self,
        kind: EntityKind,
    ) -> StorageResult<Vec<T>> {
        let rows = sqlx::query("SELECT data FROM objects WHERE kind = $1")
            .bind(kind.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_data).collect()
    }

    async fn fetch_related<T: serde::de::DeserializeOwned>(
        &self,
        kind: EntityKind,
        parent_field: &str,
        parent_id: Uuid,
    ) -> StorageResult<Vec<T>> {
        let rows = sqlx::query("SELECT data FROM objects WHERE kind = $1 AND data->>$2 = $3")
            .bind(kind.as_str())
            .bind(parent_field)
            .bind(parent_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_data).collect()
    }

    async fn remove(&self, kind: EntityKind, id: Uuid) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM objects WHERE kind = $1 AND id = $2")
            .bind(kind.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn decode_data<T: serde::de::DeserializeOwned>(row: &PgRow) -> StorageResult<T> {
    let data: serde_json::Value = row.try_get("data")?;
    serde_json::from_value(data).map_err(Into::into)
}

#[async_trait]
impl StateStore for PgStore {
    async fn save_state(&self, state: &State) -> StorageResult<()> {
        self.upsert(
            EntityKind::State,
            state.id.as_uuid(),
            state,
            state.created_at,
            state.updated_at,
        )
        .await
    }

    async fn get_state(&self, id: StateId) -> StorageResult<Option<State>> {
        self.fetch(EntityKind::State, id.as_uuid()).await
    }

    async fn list_states(&self) -> StorageResult<Vec<State>> {
        self.fetch_all(EntityKind::State).await
    }

    async fn delete_state(&self, id: StateId) -> StorageResult<bool> {
        self.remove(EntityKind::State, id.as_uuid()).await
    }
}

#[async_trait]
impl CityStore for PgStore {
    async fn save_city(&self, city: &City) -> StorageResult<()> {
        self.upsert(
            EntityKind::City,
            city.id.as_uuid(),
            city,
            city.created_at,
            city.updated_at,
        )
        .await
    }

    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>> {
        self.fetch(EntityKind::City, id.as_uuid()).await
    }

    async fn list_cities(&self) -> StorageResult<Vec<City>> {
        self.fetch_all(EntityKind::City).await
    }

    async fn list_cities_by_state(&self, state_id: StateId) -> StorageResult<Vec<City>> {
        self.fetch_related(EntityKind::City, "state_id", state_id.as_uuid())
            .await
    }

    async fn delete_city(&self, id: CityId) -> StorageResult<bool> {
        self.remove(EntityKind::City, id.as_uuid()).await
    }
}

#[async_trait]
impl AmenityStore for PgStore {
    async fn save_amenity(&self, amenity: &Amenity) -> StorageResult<()> {
        self.upsert(
            EntityKind::Amenity,
            amenity.id.as_uuid(),
            amenity,
            amenity.created_at,
            amenity.updated_at,
        )
        .await
    }

    async fn get_amenity(&self, id: AmenityId) -> StorageResult<Option<Amenity>> {
        self.fetch(EntityKind::Amenity, id.as_uuid()).await
    }

    async fn list_amenities(&self) -> StorageResult<Vec<Amenity>> {
        self.fetch_all(EntityKind::Amenity).await
    }

    async fn delete_amenity(&self, id: AmenityId) -> StorageResult<bool> {
        self.remove(EntityKind::Amenity, id.as_uuid()).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn save_user(&self, user: &User) -> StorageResult<()> {
        self.upsert(
            EntityKind::User,
            user.id.as_uuid(),
            user,
            user.created_at,
            user.updated_at,
        )
        .await
    }

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>> {
        self.fetch(EntityKind::User, id.as_uuid()).await
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        self.fetch_all(EntityKind::User).await
    }

    async fn delete_user(&self, id: UserId) -> StorageResult<bool> {
        self.remove(EntityKind::User, id.as_uuid()).await
    }
}

#[async_trait]
impl PlaceStore for PgStore {
    async fn save_place(&self, place: &Place) -> StorageResult<()> {
        self.upsert(
            EntityKind::Place,
            place.id.as_uuid(),
            place,
            place.created_at,
            place.updated_at,
        )
        .await
    }

    async fn get_place(&self, id: PlaceId) -> StorageResult<Option<Place>> {
        self.fetch(EntityKind::Place, id.as_uuid()).await
    }

    async fn list_places(&self) -> StorageResult<Vec<Place>> {
        self.fetch_all(EntityKind::Place).await
    }

    async fn list_places_by_city(&self, city_id: CityId) -> StorageResult<Vec<Place>> {
        self.fetch_related(EntityKind::Place, "city_id", city_id.as_uuid())
            .await
    }

    async fn delete_place(&self, id: PlaceId) -> StorageResult<bool> {
        self.remove(EntityKind::Place, id.as_uuid()).await
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn save_review(&self, review: &Review) -> StorageResult<()> {
        self.upsert(
            EntityKind::Review,
            review.id.as_uuid(),
            review,
            review.created_at,
            review.updated_at,
        )
        .await
    }

    async fn get_review(&self, id: ReviewId) -> StorageResult<Option<Review>> {
        self.fetch(EntityKind::Review, id.as_uuid()).await
    }

    async fn list_reviews(&self) -> StorageResult<Vec<Review>> {
        self.fetch_all(EntityKind::Review).await
    }

    async fn list_reviews_by_place(&self, place_id: PlaceId) -> StorageResult<Vec<Review>> {
        self.fetch_related(EntityKind::Review, "place_id", place_id.as_uuid())
            .await
    }

    async fn delete_review(&self, id: ReviewId) -> StorageResult<bool> {
        self.remove(EntityKind::Review, id.as_uuid()).await
    }
}

#[async_trait]
impl ObjectStore for PgStore {
    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM objects WHERE kind = $1")
            .bind(kind.as_str())
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = row.try_get("total")?;
        Ok(total.try_into().unwrap_or_default())
    }

    async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
