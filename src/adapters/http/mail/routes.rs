//! Routes for the mail relay.

use axum::{routing::post, Router};

use super::handlers::send_email;
use crate::adapters::http::AppState;

/// # Routes
/// - `POST /api/send-email` - multipart `email` + `file` (PDF)
pub fn mail_routes() -> Router<AppState> {
    Router::new().route("/api/send-email", post(send_email))
}
