//! Response bodies shared by every HTTP module, and the mapping from
//! application errors to status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::DesignError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ExportError, MailError};

// ════════════════════════════════════════════════════════════════════════════
// JSON API errors
// ════════════════════════════════════════════════════════════════════════════

/// Error body of the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(code: ErrorCode, resource_type: &str, id: &str) -> Self {
        Self {
            code: code.to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn export_failed(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ExportFailed.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn session_limit(limit: usize) -> Self {
        Self {
            code: ErrorCode::SessionLimitReached.to_string(),
            message: format!("Too many open designs ({}); try again later", limit),
            details: None,
        }
    }

    /// Carries the domain error code and its details.
    pub fn from_domain(err: &DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| serde_json::json!(err.details));
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps a handler failure onto the JSON API.
pub fn design_error_response(error: DesignError) -> Response {
    match error {
        DesignError::NotFound(id) => {
            ErrorResponse::not_found(ErrorCode::DesignNotFound, "Design", &id.to_string())
                .into_response_with(StatusCode::NOT_FOUND)
        }
        DesignError::Domain(err) => {
            ErrorResponse::from_domain(&err).into_response_with(StatusCode::BAD_REQUEST)
        }
        DesignError::Export(err @ ExportError::UnsupportedFormat(_)) => {
            ErrorResponse::bad_request(err.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
        DesignError::Export(err) => {
            ErrorResponse::export_failed(err.to_string())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DesignError::Mail(err) => mail_error_response(&err),
        DesignError::SessionLimit(limit) => {
            ErrorResponse::session_limit(limit).into_response_with(StatusCode::SERVICE_UNAVAILABLE)
        }
        DesignError::Infrastructure(msg) => {
            ErrorResponse::internal(msg).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Mail submission replies
// ════════════════════════════════════════════════════════════════════════════

/// `{ "success": true }` or `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MailResponse {
    Sent { success: bool },
    Failed { error: String },
}

impl MailResponse {
    pub fn sent() -> Self {
        MailResponse::Sent { success: true }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        MailResponse::Failed {
            error: error.into(),
        }
    }
}

/// User-facing text for a mail failure.
pub fn mail_error_message(error: &MailError) -> String {
    match error {
        MailError::Transport(reason) => {
            format!("메일 발송 실패: {}. (Check server logs)", reason)
        }
        other => other.to_string(),
    }
}

/// 400 for request problems, 500 for configuration and transport failures.
pub fn mail_error_response(error: &MailError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(MailResponse::failed(mail_error_message(error)))).into_response()
}

/// Maps a failed email-a-design request onto mail reply bodies.
pub fn email_design_error_response(error: DesignError) -> Response {
    let (status, message) = match error {
        DesignError::Mail(err) => return mail_error_response(&err),
        DesignError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Design not found: {}", id)),
        DesignError::Domain(err) => (StatusCode::BAD_REQUEST, err.message),
        DesignError::Export(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        err @ DesignError::SessionLimit(_) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
        DesignError::Infrastructure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    };
    (status, Json(MailResponse::failed(message))).into_response()
}
