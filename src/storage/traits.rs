//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing the request handlers.
//!
//! Each entity type gets its own method family (save/get/list/delete); the
//! three child entities additionally expose a relationship query used by the
//! nested collection routes. `save_*` is insert-or-replace and must persist
//! before returning — there is no write-behind anywhere in the contract.

use async_trait::async_trait;

use crate::domain::{
    Amenity, AmenityId, City, CityId, EntityKind, Place, PlaceId, Review, ReviewId, State, StateId,
    User, UserId,
};
use crate::error::StorageResult;

/// Persistence operations for [`State`] objects.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Insert or replace a state.
    async fn save_state(&self, state: &State) -> StorageResult<()>;

    /// Get a state by id.
    async fn get_state(&self, id: StateId) -> StorageResult<Option<State>>;

    /// List all states.
    async fn list_states(&self) -> StorageResult<Vec<State>>;

    /// Delete a state. Returns whether anything was removed.
    async fn delete_state(&self, id: StateId) -> StorageResult<bool>;
}

/// Persistence operations for [`City`] objects.
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Insert or replace a city.
    async fn save_city(&self, city: &City) -> StorageResult<()>;

    /// Get a city by id.
    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>>;

    /// List all cities.
    async fn list_cities(&self) -> StorageResult<Vec<City>>;

    /// List the cities belonging to a state.
    ///
    /// Children orphaned by a shallow parent delete do not appear here; they
    /// stay reachable by id only.
    async fn list_cities_by_state(&self, state_id: StateId) -> StorageResult<Vec<City>>;

    /// Delete a city. Returns whether anything was removed.
    async fn delete_city(&self, id: CityId) -> StorageResult<bool>;
}

/// Persistence operations for [`Amenity`] objects.
#[async_trait]
pub trait AmenityStore: Send + Sync {
    /// Insert or replace an amenity.
    async fn save_amenity(&self, amenity: &Amenity) -> StorageResult<()>;

    /// Get an amenity by id.
    async fn get_amenity(&self, id: AmenityId) -> StorageResult<Option<Amenity>>;

    /// List all amenities.
    async fn list_amenities(&self) -> StorageResult<Vec<Amenity>>;

    /// Delete an amenity. Returns whether anything was removed.
    async fn delete_amenity(&self, id: AmenityId) -> StorageResult<bool>;
}

/// Persistence operations for [`User`] objects.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert or replace a user.
    async fn save_user(&self, user: &User) -> StorageResult<()>;

    /// Get a user by id.
    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>>;

    /// List all users.
    async fn list_users(&self) -> StorageResult<Vec<User>>;

    /// Delete a user. Returns whether anything was removed.
    async fn delete_user(&self, id: UserId) -> StorageResult<bool>;
}

/// Persistence operations for [`Place`] objects.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Insert or replace a place.
    async fn save_place(&self, place: &Place) -> StorageResult<()>;

    /// Get a place by id.
    async fn get_place(&self, id: PlaceId) -> StorageResult<Option<Place>>;

    /// List all places.
    async fn list_places(&self) -> StorageResult<Vec<Place>>;

    /// List the places belonging to a city.
    async fn list_places_by_city(&self, city_id: CityId) -> StorageResult<Vec<Place>>;

    /// Delete a place. Returns whether anything was removed.
    async fn delete_place(&self, id: PlaceId) -> StorageResult<bool>;
}

/// Persistence operations for [`Review`] objects.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert or replace a review.
    async fn save_review(&self, review: &Review) -> StorageResult<()>;

    /// Get a review by id.
    async fn get_review(&self, id: ReviewId) -> StorageResult<Option<Review>>;

    /// List all reviews.
    async fn list_reviews(&self) -> StorageResult<Vec<Review>>;

    /// List the reviews belonging to a place.
    async fn list_reviews_by_place(&self, place_id: PlaceId) -> StorageResult<Vec<Review>>;

    /// Delete a review. Returns whether anything was removed.
    async fn delete_review(&self, id: ReviewId) -> StorageResult<bool>;
}

/// Combined storage trait for all object operations.
///
/// This is the single handle handlers receive; one `Arc<dyn ObjectStore>`
/// is built by the factory and injected through the application state.
#[async_trait]
pub trait ObjectStore:
    StateStore + CityStore + AmenityStore + UserStore + PlaceStore + ReviewStore
{
    /// Count persisted objects of one kind.
    async fn count(&self, kind: EntityKind) -> StorageResult<u64>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}

/// Trait object alias for [`ObjectStore`].
pub type DynObjectStore = dyn ObjectStore;
