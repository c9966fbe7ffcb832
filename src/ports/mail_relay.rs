//! Mail Relay Port - delivers an exported design to a recipient.

use async_trait::async_trait;
use thiserror::Error;

/// Port for sending a design PDF by email.
///
/// # Contract
///
/// - `recipient` must be non-empty and `pdf` must be the unmodified export bytes
/// - The PDF is attached as `lesson-plan.pdf`
/// - No retries; a failure is returned to the caller as-is
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send_design_email(&self, recipient: &str, pdf: &[u8]) -> Result<(), MailError>;
}

/// Errors that can occur while relaying mail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Email and file are required")]
    MissingAttachment,

    /// Credentials are absent on the server.
    #[error("Server configuration error: Missing email credentials")]
    NotConfigured,

    /// The relay rejected or failed the send; the message is passed through.
    #[error("{0}")]
    Transport(String),
}

impl MailError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }

    /// True for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MailError::InvalidRecipient(_) | MailError::MissingAttachment)
    }
}

/// Rejects empty recipients and empty attachments.
pub fn check_submission(recipient: &str, pdf: &[u8]) -> Result<(), MailError> {
    if recipient.trim().is_empty() || pdf.is_empty() {
        return Err(MailError::MissingAttachment);
    }
    Ok(())
}
