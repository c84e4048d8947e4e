//! API layer module.
//!
//! HTTP handlers, payload validation, and routing for the placehub service.

pub mod handlers;
pub mod payload;
pub mod router;
pub mod state;

pub use router::{create_router, into_service};
pub use state::AppState;
