//! File-based storage backend.
//!
//! This backend stores each object as a JSON file with file locking for
//! atomic operations. Suitable for development and single-node deployments.
//!
//! Directory structure:
//! ```text
//! data/
//! ├── states/
//! │   └── {id}.json
//! ├── cities/
//! │   └── {id}.json
//! ├── amenities/
//! ├── users/
//! ├── places/
//! └── reviews/
//! ```

mod objects;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::FileStorageConfig;
use crate::domain::{
    Amenity, AmenityId, City, CityId, EntityKind, Place, PlaceId, Review, ReviewId, State, StateId,
    User, UserId,
};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{
    AmenityStore, CityStore, ObjectStore, PlaceStore, ReviewStore, StateStore, UserStore,
};

pub use objects::ObjectDir;

/// File-based storage implementation.
pub struct FileStore {
    /// Base data directory.
    base_dir: PathBuf,
    states: ObjectDir<State>,
    cities: ObjectDir<City>,
    amenities: ObjectDir<Amenity>,
    users: ObjectDir<User>,
    places: ObjectDir<Place>,
    reviews: ObjectDir<Review>,
}

impl FileStore {
    /// Create a new file storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directories cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let base_dir = config.data_dir.clone();

        Self::ensure_directories(&base_dir)?;

        Ok(Self {
            states: ObjectDir::new(base_dir.join(EntityKind::State.collection())),
            cities: ObjectDir::new(base_dir.join(EntityKind::City.collection())),
            amenities: ObjectDir::new(base_dir.join(EntityKind::Amenity.collection())),
            users: ObjectDir::new(base_dir.join(EntityKind::User.collection())),
            places: ObjectDir::new(base_dir.join(EntityKind::Place.collection())),
            reviews: ObjectDir::new(base_dir.join(EntityKind::Review.collection())),
            base_dir,
        })
    }

    /// Ensure all required directories exist.
    fn ensure_directories(base_dir: &Path) -> StorageResult<()> {
        for kind in EntityKind::ALL {
            let dir = base_dir.join(kind.collection());
            std::fs::create_dir_all(&dir).map_err(|e| {
                StorageError::FileIO(format!("Failed to create directory {dir:?}: {e}"))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn save_state(&self, state: &State) -> StorageResult<()> {
        self.states.save(state.id.as_uuid(), state).await
    }

    async fn get_state(&self, id: StateId) -> StorageResult<Option<State>> {
        self.states.load(id.as_uuid()).await
    }

    async fn list_states(&self) -> StorageResult<Vec<State>> {
        self.states.list().await
    }

    async fn delete_state(&self, id: StateId) -> StorageResult<bool> {
        self.states.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl CityStore for FileStore {
    async fn save_city(&self, city: &City) -> StorageResult<()> {
        self.cities.save(city.id.as_uuid(), city).await
    }

    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>> {
        self.cities.load(id.as_uuid()).await
    }

    async fn list_cities(&self) -> StorageResult<Vec<City>> {
        self.cities.list().await
    }

    async fn list_cities_by_state(&self, state_id: StateId) -> StorageResult<Vec<City>> {
        let mut cities = self.cities.list().await?;
        cities.retain(|city| city.state_id == state_id);
        Ok(cities)
    }

    async fn delete_city(&self, id: CityId) -> StorageResult<bool> {
        self.cities.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl AmenityStore for FileStore {
    async fn save_amenity(&self, amenity: &Amenity) -> StorageResult<()> {
        self.amenities.save(amenity.id.as_uuid(), amenity).await
    }

    async fn get_amenity(&self, id: AmenityId) -> StorageResult<Option<Amenity>> {
        self.amenities.load(id.as_uuid()).await
    }

    async fn list_amenities(&self) -> StorageResult<Vec<Amenity>> {
        self.amenities.list().await
    }

    async fn delete_amenity(&self, id: AmenityId) -> StorageResult<bool> {
        self.amenities.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl UserStore for FileStore {
    async fn save_user(&self, user: &User) -> StorageResult<()> {
        self.users.save(user.id.as_uuid(), user).await
    }

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>> {
        self.users.load(id.as_uuid()).await
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        self.users.list().await
    }

    async fn delete_user(&self, id: UserId) -> StorageResult<bool> {
        self.users.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl PlaceStore for FileStore {
    async fn save_place(&self, place: &Place) -> StorageResult<()> {
        self.places.save(place.id.as_uuid(), place).await
    }

    async fn get_place(&self, id: PlaceId) -> StorageResult<Option<Place>> {
        self.places.load(id.as_uuid()).await
    }

    async fn list_places(&self) -> StorageResult<Vec<Place>> {
        self.places.list().await
    }

    async fn list_places_by_city(&self, city_id: CityId) -> StorageResult<Vec<Place>> {
        let mut places = self.places.list().await?;
        places.retain(|place| place.city_id == city_id);
        Ok(places)
    }

    async fn delete_place(&self, id: PlaceId) -> StorageResult<bool> {
        self.places.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl ReviewStore for FileStore {
    async fn save_review(&self, review: &Review) -> StorageResult<()> {
        self.reviews.save(review.id.as_uuid(), review).await
    }

    async fn get_review(&self, id: ReviewId) -> StorageResult<Option<Review>> {
        self.reviews.load(id.as_uuid()).await
    }

    async fn list_reviews(&self) -> StorageResult<Vec<Review>> {
        self.reviews.list().await
    }

    async fn list_reviews_by_place(&self, place_id: PlaceId) -> StorageResult<Vec<Review>> {
        let mut reviews = self.reviews.list().await?;
        reviews.retain(|review| review.place_id == place_id);
        Ok(reviews)
    }

    async fn delete_review(&self, id: ReviewId) -> StorageResult<bool> {
        self.reviews.delete(id.as_uuid()).await
    }
}

#[async_trait]
impl ObjectStore for FileStore {
    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        match kind {
            EntityKind::State => self.states.count().await,
            EntityKind::City => self.cities.count().await,
            EntityKind::Amenity => self.amenities.count().await,
            EntityKind::User => self.users.count().await,
            EntityKind::Place => self.places.count().await,
            EntityKind::Review => self.reviews.count().await,
        }
    }

    async fn health_check(&self) -> StorageResult<()> {
        if self.base_dir.is_dir() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
