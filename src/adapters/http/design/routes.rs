//! Axum router for design session endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_question, advance, create_design, delete_design, email_design, export_design,
    get_design, get_document, remove_question, retreat, select_school_level, select_subject,
    set_grasps_field, toggle_custom_standard, toggle_standard, update_design,
};
use crate::adapters::http::AppState;

/// Create the design session router, nested under `/api/designs`.
///
/// # Routes
///
/// ## Lifecycle
/// - `POST /` - new session
/// - `GET /:id` - current view
/// - `PATCH /:id` - merge a partial state
/// - `DELETE /:id` - discard
///
/// ## Step editors
/// - `POST /:id/school-level`, `/:id/subject`
/// - `POST /:id/standards/toggle`, `/:id/standards/custom`
/// - `POST /:id/questions`, `DELETE /:id/questions/:kind/:index`
/// - `PUT /:id/grasps/:field`
///
/// ## Navigation and output
/// - `POST /:id/advance`, `/:id/retreat`
/// - `GET /:id/document`, `/:id/export?format=pdf|html`
/// - `POST /:id/email`
pub fn design_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_design))
        .route(
            "/:id",
            get(get_design).patch(update_design).delete(delete_design),
        )
        .route("/:id/school-level", post(select_school_level))
        .route("/:id/subject", post(select_subject))
        .route("/:id/standards/toggle", post(toggle_standard))
        .route("/:id/standards/custom", post(toggle_custom_standard))
        .route("/:id/questions", post(add_question))
        .route("/:id/questions/:kind/:index", delete(remove_question))
        .route("/:id/grasps/:field", put(set_grasps_field))
        .route("/:id/advance", post(advance))
        .route("/:id/retreat", post(retreat))
        .route("/:id/document", get(get_document))
        .route("/:id/export", get(export_design))
        .route("/:id/email", post(email_design))
}
