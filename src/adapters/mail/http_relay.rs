//! Remote mail relay client.
//!
//! Posts the PDF to a mail submission endpoint (multipart `email` + `file`)
//! and interprets its `{ success }` / `{ error }` replies.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::export::ATTACHMENT_FILENAME;
use crate::ports::{check_submission, MailError, MailRelay};

use super::content::PDF_CONTENT_TYPE;

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// `MailRelay` that delegates delivery to another service over HTTP.
pub struct HttpMailRelay {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpMailRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MailRelay for HttpMailRelay {
    async fn send_design_email(&self, recipient: &str, pdf: &[u8]) -> Result<(), MailError> {
        check_submission(recipient, pdf)?;

        let file = Part::bytes(pdf.to_vec())
            .file_name(ATTACHMENT_FILENAME)
            .mime_str(PDF_CONTENT_TYPE)
            .map_err(|e| MailError::transport(e.to_string()))?;
        let form = Form::new()
            .text("email", recipient.to_string())
            .part("file", file);

        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Mail relay unreachable");
                MailError::transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(attachment_bytes = pdf.len(), "Design email relayed");
            return Ok(());
        }

        let message = response
            .json::<RelayErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Mail relay responded with {}", status));

        tracing::warn!(status = %status, error = %message, "Mail relay rejected the message");

        Err(match status {
            StatusCode::BAD_REQUEST => MailError::MissingAttachment,
            _ if message == MailError::NotConfigured.to_string() => MailError::NotConfigured,
            _ => MailError::Transport(message),
        })
    }
}
