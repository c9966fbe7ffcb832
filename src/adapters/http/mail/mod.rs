//! HTTP adapter for the standalone mail relay endpoint.

mod handlers;
mod routes;

pub use routes::mail_routes;
