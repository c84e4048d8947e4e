//! Domain models for placehub.
//!
//! The six persisted entity types, their typed identifiers, and the
//! client-facing create/update payloads. Each update struct is an explicit
//! allow-list: a field a client must not change simply does not exist on
//! it. Timestamps are server-managed; every `apply` advances `updated_at`.

pub mod amenity;
pub mod city;
pub mod entity;
pub mod id;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::{Amenity, AmenityUpdate, NewAmenity};
pub use city::{City, CityUpdate, NewCity};
pub use entity::EntityKind;
pub use id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
pub use place::{NewPlace, Place, PlaceUpdate};
pub use review::{NewReview, Review, ReviewUpdate};
pub use state::{NewState, State, StateUpdate};
pub use user::{NewUser, User, UserUpdate};
