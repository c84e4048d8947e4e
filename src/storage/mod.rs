//! Storage layer module.
//!
//! This module provides trait-based storage abstraction allowing different
//! backends to be used without changing the request handlers.

pub mod factory;
pub mod file;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use factory::create_storage;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use traits::{
    AmenityStore, CityStore, DynObjectStore, ObjectStore, PlaceStore, ReviewStore, StateStore,
    UserStore,
};
