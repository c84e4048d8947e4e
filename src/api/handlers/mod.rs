//! HTTP request handlers, one module per resource.

pub mod amenities;
pub mod cities;
pub mod places;
pub mod reviews;
pub mod states;
pub mod status;
pub mod users;
