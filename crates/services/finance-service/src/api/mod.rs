//! API layer - HTTP handlers and routes.
//!
//! Maps JSON requests onto the account and entry services and service
//! errors onto HTTP responses.

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
