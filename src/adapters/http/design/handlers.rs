//! HTTP handlers for design session endpoints.
//!
//! These handlers connect Axum routes to the design command/query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::responses::{
    design_error_response, email_design_error_response, ErrorResponse, MailResponse,
};
use crate::adapters::http::AppState;
use crate::application::{
    CreateDesignCommand, DeleteDesignCommand, DesignChange, Direction, EmailDesignCommand,
    ExportDesignQuery, GetDesignQuery, NavigateDesignCommand, UpdateDesignCommand,
};
use crate::domain::design::{DesignUpdate, GraspsField, QuestionKind};
use crate::domain::export::download_basename;
use crate::domain::foundation::DesignId;
use crate::ports::{ExportFormat, ExportedDocument};

use super::dto::{
    AddQuestionRequest, DesignResponse, EmailDesignRequest, ExportQuery, NavigateResponse,
    SelectSchoolLevelRequest, SelectSubjectRequest, SetGraspsFieldRequest, ToggleStandardRequest,
};

fn bad_request(message: impl Into<String>) -> Response {
    ErrorResponse::bad_request(message).into_response_with(StatusCode::BAD_REQUEST)
}

fn parse_design_id(raw: &str) -> Result<DesignId, Response> {
    raw.parse::<DesignId>()
        .map_err(|_| bad_request("Invalid design ID"))
}

/// Runs one edit and replies with the settled view.
async fn apply_change(state: &AppState, raw_id: &str, change: DesignChange) -> Response {
    let design_id = match parse_design_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateDesignCommand { design_id, change };
    match state.update_design_handler().handle(cmd).await {
        Ok(snapshot) => (StatusCode::OK, Json(DesignResponse::from(snapshot))).into_response(),
        Err(e) => design_error_response(e),
    }
}

async fn navigate(state: &AppState, raw_id: &str, direction: Direction) -> Response {
    let design_id = match parse_design_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = NavigateDesignCommand {
        design_id,
        direction,
    };
    match state.navigate_design_handler().handle(cmd).await {
        Ok(result) => {
            let response = NavigateResponse {
                moved: result.moved,
                design: result.snapshot.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => design_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Session lifecycle
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/designs - Start a new design session
pub async fn create_design(State(state): State<AppState>) -> Response {
    match state.create_design_handler().handle(CreateDesignCommand).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(DesignResponse::from(result.snapshot))).into_response()
        }
        Err(e) => design_error_response(e),
    }
}

/// GET /api/designs/:id - Current view of a session
pub async fn get_design(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let design_id = match parse_design_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_design_handler().handle(GetDesignQuery { design_id }).await {
        Ok(snapshot) => (StatusCode::OK, Json(DesignResponse::from(snapshot))).into_response(),
        Err(e) => design_error_response(e),
    }
}

/// DELETE /api/designs/:id - Discard a session
pub async fn delete_design(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let design_id = match parse_design_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_design_handler()
        .handle(DeleteDesignCommand { design_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => design_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Editing
// ════════════════════════════════════════════════════════════════════════════

/// PATCH /api/designs/:id - Merge a partial state
pub async fn update_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<DesignUpdate>,
) -> Response {
    apply_change(&state, &id, DesignChange::Merge(update)).await
}

/// POST /api/designs/:id/school-level
pub async fn select_school_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectSchoolLevelRequest>,
) -> Response {
    apply_change(&state, &id, DesignChange::SelectSchoolLevel(req.school_level)).await
}

/// POST /api/designs/:id/subject
pub async fn select_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectSubjectRequest>,
) -> Response {
    apply_change(&state, &id, DesignChange::SelectSubject(req.subject_id)).await
}

/// POST /api/designs/:id/standards/toggle
pub async fn toggle_standard(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ToggleStandardRequest>,
) -> Response {
    apply_change(&state, &id, DesignChange::ToggleStandard(req.code)).await
}

/// POST /api/designs/:id/standards/custom
pub async fn toggle_custom_standard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    apply_change(&state, &id, DesignChange::ToggleCustomStandard).await
}

/// POST /api/designs/:id/questions
pub async fn add_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddQuestionRequest>,
) -> Response {
    let change = DesignChange::AddQuestion {
        kind: req.kind,
        text: req.text,
    };
    apply_change(&state, &id, change).await
}

/// DELETE /api/designs/:id/questions/:kind/:index
pub async fn remove_question(
    State(state): State<AppState>,
    Path((id, kind, index)): Path<(String, String, String)>,
) -> Response {
    let kind = match kind.parse::<QuestionKind>() {
        Ok(kind) => kind,
        Err(e) => return bad_request(e.to_string()),
    };
    let index = match index.parse::<usize>() {
        Ok(index) => index,
        Err(_) => return bad_request(format!("Invalid question index: {}", index)),
    };

    apply_change(&state, &id, DesignChange::RemoveQuestion { kind, index }).await
}

/// PUT /api/designs/:id/grasps/:field
pub async fn set_grasps_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(String, String)>,
    Json(req): Json<SetGraspsFieldRequest>,
) -> Response {
    let field = match field.parse::<GraspsField>() {
        Ok(field) => field,
        Err(e) => return bad_request(e.to_string()),
    };

    let change = DesignChange::SetGraspsField {
        field,
        value: req.value,
    };
    apply_change(&state, &id, change).await
}

// ════════════════════════════════════════════════════════════════════════════
// Navigation
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/designs/:id/advance - Next step if the current one validates
pub async fn advance(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    navigate(&state, &id, Direction::Advance).await
}

/// POST /api/designs/:id/retreat - Previous step, data kept
pub async fn retreat(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    navigate(&state, &id, Direction::Retreat).await
}

// ════════════════════════════════════════════════════════════════════════════
// Document, export and delivery
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/designs/:id/document - Rendered review document
pub async fn get_document(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let design_id = match parse_design_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.export_design_handler().render(design_id).await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => design_error_response(e),
    }
}

/// GET /api/designs/:id/export?format=pdf|html - Download
pub async fn export_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let design_id = match parse_design_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match query.format.as_deref().map(str::parse::<ExportFormat>) {
        None => ExportFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(e)) => return bad_request(e.to_string()),
    };

    match state
        .export_design_handler()
        .handle(ExportDesignQuery { design_id, format })
        .await
    {
        Ok(document) => download_response(document),
        Err(e) => design_error_response(e),
    }
}

/// POST /api/designs/:id/email - Export to PDF and mail it
///
/// A missing or unreadable body counts as an empty recipient, so the
/// reply keeps the `{error}` shape instead of axum's rejection.
pub async fn email_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmailDesignRequest>, JsonRejection>,
) -> Response {
    let design_id = match parse_design_id(&id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(MailResponse::failed("Invalid design ID")),
            )
                .into_response()
        }
    };

    let recipient = match payload {
        Ok(Json(req)) => req.email,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable email request body");
            String::new()
        }
    };

    let cmd = EmailDesignCommand {
        design_id,
        recipient,
    };
    match state.email_design_handler().handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MailResponse::sent())).into_response(),
        Err(e) => email_design_error_response(e),
    }
}

/// Plain `filename` value: the real name when it is quotable ASCII,
/// otherwise the subject-less default.
fn ascii_filename(document: &ExportedDocument) -> String {
    let quotable = document
        .filename
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\');
    if quotable {
        document.filename.clone()
    } else {
        format!("{}.{}", download_basename(None), document.format.extension())
    }
}

/// `attachment` disposition with an ASCII fallback and the UTF-8 name.
fn content_disposition(document: &ExportedDocument) -> Result<HeaderValue, Response> {
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_filename(document),
        urlencoding::encode(&document.filename)
    );
    HeaderValue::from_str(&value).map_err(|e| {
        ErrorResponse::internal(e.to_string()).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
    })
}

fn download_response(document: ExportedDocument) -> Response {
    let disposition = match content_disposition(&document) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let content_type = match HeaderValue::from_str(&document.content_type) {
        Ok(value) => value,
        Err(e) => {
            return ErrorResponse::internal(e.to_string())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_encodes_subject_name() {
        let doc = ExportedDocument::from_pdf(b"%PDF".to_vec(), "lesson-plan-영어 I");
        let value = content_disposition(&doc).unwrap();
        let text = value.to_str().unwrap();

        assert!(text.starts_with("attachment; filename=\"lesson-plan-design.pdf\""));
        assert!(text.contains("filename*=UTF-8''lesson-plan-%EC%98%81%EC%96%B4%20I.pdf"));
    }

    #[test]
    fn disposition_keeps_ascii_name() {
        let doc = ExportedDocument::from_html("<html></html>".to_string(), "lesson-plan-design");
        let value = content_disposition(&doc).unwrap();

        assert_eq!(
            value.to_str().unwrap(),
            "attachment; filename=\"lesson-plan-design.html\"; filename*=UTF-8''lesson-plan-design.html"
        );
    }

    #[test]
    fn quoted_names_fall_back_to_default() {
        let doc = ExportedDocument::from_pdf(b"%PDF".to_vec(), "lesson-plan-\"x\"");
        assert_eq!(ascii_filename(&doc), "lesson-plan-design.pdf");
    }

    #[test]
    fn download_response_sets_headers() {
        let doc = ExportedDocument::from_html("<html></html>".to_string(), "lesson-plan-design");
        let response = download_response(doc);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let response = parse_design_id("nope").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
