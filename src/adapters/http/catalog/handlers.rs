//! HTTP handlers for curriculum and suggestion endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::responses::ErrorResponse;
use crate::adapters::http::AppState;
use crate::domain::foundation::{ErrorCode, SchoolLevel};

use super::dto::{LevelSubjectsResponse, SubjectStandardsResponse, SuggestionsResponse};

fn parse_level(raw: &str) -> Result<SchoolLevel, Response> {
    raw.parse::<SchoolLevel>().map_err(|e| {
        ErrorResponse::bad_request(e.to_string()).into_response_with(StatusCode::BAD_REQUEST)
    })
}

/// GET /api/curriculum - The whole catalog
pub async fn get_catalog(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.catalog.as_ref())).into_response()
}

/// GET /api/curriculum/:level - Subjects of a school level
pub async fn list_subjects(State(state): State<AppState>, Path(level): Path<String>) -> Response {
    let level = match parse_level(&level) {
        Ok(level) => level,
        Err(response) => return response,
    };

    let response = LevelSubjectsResponse {
        level,
        level_name: level.display_name(),
        subjects: state.catalog.subjects(level).to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/curriculum/:level/:subject/groups - Grouped standards of a subject
pub async fn get_standard_groups(
    State(state): State<AppState>,
    Path((level, subject_id)): Path<(String, String)>,
) -> Response {
    let level = match parse_level(&level) {
        Ok(level) => level,
        Err(response) => return response,
    };

    match state.catalog.subject(level, &subject_id) {
        Some(subject) => {
            (StatusCode::OK, Json(SubjectStandardsResponse::from(subject))).into_response()
        }
        None => ErrorResponse::not_found(ErrorCode::SubjectNotFound, "Subject", &subject_id)
            .into_response_with(StatusCode::NOT_FOUND),
    }
}

/// GET /api/concepts/suggestions - Step 2-4 vocabularies and guidance
pub async fn get_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse::build())
}
