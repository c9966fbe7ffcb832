//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes; all of
//! them share [`AppState`].

pub mod catalog;
pub mod design;
pub mod mail;
pub mod responses;
mod router;
mod state;

pub use router::{api_router, app_router};
pub use state::AppState;
