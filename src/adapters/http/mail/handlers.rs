//! Handler for the multipart mail relay.
//!
//! Accepts a recipient and a PDF produced elsewhere and hands both to the
//! configured [`MailRelay`](crate::ports::MailRelay).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::adapters::http::responses::{mail_error_response, MailResponse};
use crate::adapters::http::AppState;
use crate::application::RelayMailCommand;

/// POST /api/send-email
pub async fn send_email(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let cmd = match read_submission(&mut multipart).await {
        Ok(cmd) => cmd,
        Err(message) => {
            warn!(error = %message, "Malformed mail submission");
            return (StatusCode::BAD_REQUEST, Json(MailResponse::failed(message))).into_response();
        }
    };

    match state.relay_mail_handler().handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MailResponse::sent())).into_response(),
        Err(e) => mail_error_response(&e),
    }
}

/// Collects the `email` and `file` parts; blank values count as missing.
async fn read_submission(multipart: &mut Multipart) -> Result<RelayMailCommand, String> {
    let mut cmd = RelayMailCommand::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("email") => {
                let text = field.text().await.map_err(|e| e.to_string())?;
                let text = text.trim();
                if !text.is_empty() {
                    cmd.recipient = Some(text.to_string());
                }
            }
            Some("file") => {
                let bytes = field.bytes().await.map_err(|e| e.to_string())?;
                if !bytes.is_empty() {
                    cmd.pdf = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(cmd)
}
