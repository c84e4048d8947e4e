//! In-memory storage backend.
//!
//! One concurrent map per entity kind. Everything is lost on shutdown, which
//! makes this the backend of choice for tests and ephemeral runs.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Amenity, AmenityId, City, CityId, EntityKind, Place, PlaceId, Review, ReviewId, State, StateId,
    User, UserId,
};
use crate::error::StorageResult;
use crate::storage::traits::{
    AmenityStore, CityStore, ObjectStore, PlaceStore, ReviewStore, StateStore, UserStore,
};

/// In-memory storage implementation.
#[derive(Default)]
pub struct MemoryStore {
    states: DashMap<StateId, State>,
    cities: DashMap<CityId, City>,
    amenities: DashMap<AmenityId, Amenity>,
    users: DashMap<UserId, User>,
    places: DashMap<PlaceId, Place>,
    reviews: DashMap<ReviewId, Review>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn save_state(&self, state: &State) -> StorageResult<()> {
        self.states.insert(state.id, state.clone());
        Ok(())
    }

    async fn get_state(&self, id: StateId) -> StorageResult<Option<State>> {
        Ok(self.states.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_states(&self) -> StorageResult<Vec<State>> {
        Ok(self.states.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn delete_state(&self, id: StateId) -> StorageResult<bool> {
        Ok(self.states.remove(&id).is_some())
    }
}

#[async_trait]
impl CityStore for MemoryStore {
    async fn save_city(&self, city: &City) -> StorageResult<()> {
        self.cities.insert(city.id, city.clone());
        Ok(())
    }

    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>> {
        Ok(self.cities.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_cities(&self) -> StorageResult<Vec<City>> {
        Ok(self.cities.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn list_cities_by_state(&self, state_id: StateId) -> StorageResult<Vec<City>> {
        Ok(self
            .cities
            .iter()
            .filter(|entry| entry.state_id == state_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_city(&self, id: CityId) -> StorageResult<bool> {
        Ok(self.cities.remove(&id).is_some())
    }
}

#[async_trait]
impl AmenityStore for MemoryStore {
    async fn save_amenity(&self, amenity: &Amenity) -> StorageResult<()> {
        self.amenities.insert(amenity.id, amenity.clone());
        Ok(())
    }

    async fn get_amenity(&self, id: AmenityId) -> StorageResult<Option<Amenity>> {
        Ok(self.amenities.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_amenities(&self) -> StorageResult<Vec<Amenity>> {
        Ok(self.amenities.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn delete_amenity(&self, id: AmenityId) -> StorageResult<bool> {
        Ok(self.amenities.remove(&id).is_some())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn save_user(&self, user: &User) -> StorageResult<()> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn delete_user(&self, id: UserId) -> StorageResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[async_trait]
impl PlaceStore for MemoryStore {
    async fn save_place(&self, place: &Place) -> StorageResult<()> {
        self.places.insert(place.id, place.clone());
        Ok(())
    }

    async fn get_place(&self, id: PlaceId) -> StorageResult<Option<Place>> {
        Ok(self.places.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_places(&self) -> StorageResult<Vec<Place>> {
        Ok(self.places.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn list_places_by_city(&self, city_id: CityId) -> StorageResult<Vec<Place>> {
        Ok(self
            .places
            .iter()
            .filter(|entry| entry.city_id == city_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_place(&self, id: PlaceId) -> StorageResult<bool> {
        Ok(self.places.remove(&id).is_some())
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn save_review(&self, review: &Review) -> StorageResult<()> {
        self.reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn get_review(&self, id: ReviewId) -> StorageResult<Option<Review>> {
        Ok(self.reviews.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_reviews(&self) -> StorageResult<Vec<Review>> {
        Ok(self.reviews.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn list_reviews_by_place(&self, place_id: PlaceId) -> StorageResult<Vec<Review>> {
        Ok(self
            .reviews
            .iter()
            .filter(|entry| entry.place_id == place_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_review(&self, id: ReviewId) -> StorageResult<bool> {
        Ok(self.reviews.remove(&id).is_some())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        let count = match kind {
            EntityKind::State => self.states.len(),
            EntityKind::City => self.cities.len(),
            EntityKind::Amenity => self.amenities.len(),
            EntityKind::User => self.users.len(),
            EntityKind::Place => self.places.len(),
            EntityKind::Review => self.reviews.len(),
        };
        Ok(count as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
