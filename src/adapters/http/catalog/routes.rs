//! Routes for the read-only reference data.

use axum::{routing::get, Router};

use super::handlers::{get_catalog, get_standard_groups, get_suggestions, list_subjects};
use crate::adapters::http::AppState;

/// # Routes
/// - `GET /api/curriculum` - whole catalog
/// - `GET /api/curriculum/:level` - subjects of a level
/// - `GET /api/curriculum/:level/:subject/groups` - grouped standards
/// - `GET /api/concepts/suggestions` - lenses, macro concepts, guidance
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/curriculum", get(get_catalog))
        .route("/api/curriculum/:level", get(list_subjects))
        .route("/api/curriculum/:level/:subject/groups", get(get_standard_groups))
        .route("/api/concepts/suggestions", get(get_suggestions))
}
