//! SMTP mail relay.
//!
//! Implements `MailRelay` with `lettre`, sending the design PDF as an
//! attachment from the configured SMTP account.
//!
//! # Configuration
//!
//! ```ignore
//! let relay = SmtpMailRelay::from_config(&config.email)?;
//! relay.send_design_email("teacher@example.com", &pdf).await?;
//! ```

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::EmailConfig;
use crate::domain::export::ATTACHMENT_FILENAME;
use crate::ports::{check_submission, MailError, MailRelay};

use super::content::{HTML_BODY, PDF_CONTENT_TYPE, SUBJECT};

/// Port that implies implicit TLS; any other port negotiates STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Authenticated sender and its pooled transport.
struct Sender {
    mailbox: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// SMTP-backed mail relay.
///
/// Missing credentials are not an error at construction time: the relay
/// still starts and every send reports `MailError::NotConfigured`.
pub struct SmtpMailRelay {
    sender: Option<Sender>,
}

impl SmtpMailRelay {
    /// Builds the relay from email configuration.
    ///
    /// # Errors
    ///
    /// Returns `MailError::Transport` if the TLS parameters for the host
    /// cannot be built or the sender address does not parse.
    pub fn from_config(config: &EmailConfig) -> Result<Self, MailError> {
        let (username, password) = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) if config.has_credentials() => (username, password),
            _ => {
                tracing::warn!(
                    smtp_host = %config.smtp_host,
                    "SMTP credentials missing; email delivery disabled"
                );
                return Ok(Self { sender: None });
            }
        };

        let address: Address = username
            .parse()
            .map_err(|e| MailError::transport(format!("invalid sender address: {}", e)))?;
        let mailbox = Mailbox::new(Some(config.from_name.clone()), address);

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| MailError::transport(e.to_string()))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                username.clone(),
                password.expose_secret().clone(),
            ))
            .build();

        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            "SMTP mail relay configured"
        );

        Ok(Self {
            sender: Some(Sender { mailbox, transport }),
        })
    }

    /// Whether credentials were supplied.
    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }
}

/// Builds the design email with the PDF attached.
fn build_message(from: Mailbox, recipient: &str, pdf: &[u8]) -> Result<Message, MailError> {
    let to: Mailbox = recipient
        .trim()
        .parse()
        .map_err(|_| MailError::InvalidRecipient(recipient.to_string()))?;

    let content_type = ContentType::parse(PDF_CONTENT_TYPE)
        .map_err(|e| MailError::transport(e.to_string()))?;
    let attachment = Attachment::new(ATTACHMENT_FILENAME.to_string()).body(pdf.to_vec(), content_type);

    Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::html(HTML_BODY.to_string()))
                .singlepart(attachment),
        )
        .map_err(|e| MailError::transport(e.to_string()))
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send_design_email(&self, recipient: &str, pdf: &[u8]) -> Result<(), MailError> {
        check_submission(recipient, pdf)?;

        let Some(sender) = &self.sender else {
            tracing::error!("Missing email credentials in environment variables");
            return Err(MailError::NotConfigured);
        };

        let message = build_message(sender.mailbox.clone(), recipient, pdf)?;

        sender.transport.send(message).await.map_err(|e| {
            tracing::error!(error = %e, "SMTP send failed");
            MailError::transport(e.to_string())
        })?;

        tracing::info!(attachment_bytes = pdf.len(), "Design email sent");
        tracing::debug!(recipient = %recipient, "Design email recipient");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn configured() -> EmailConfig {
        EmailConfig {
            smtp_username: Some("designer@example.com".to_string()),
            smtp_password: Some(SecretString::new("app-password".to_string())),
            ..Default::default()
        }
    }

    fn sender_mailbox() -> Mailbox {
        "Concept Design <designer@example.com>".parse().unwrap()
    }

    #[tokio::test]
    async fn unconfigured_relay_reports_configuration_error() {
        let relay = SmtpMailRelay::from_config(&EmailConfig::default()).unwrap();
        assert!(!relay.is_configured());

        let result = relay.send_design_email("teacher@example.com", b"%PDF-1.5").await;
        assert_eq!(result, Err(MailError::NotConfigured));
    }

    #[tokio::test]
    async fn empty_submission_is_rejected_before_configuration_check() {
        let relay = SmtpMailRelay::from_config(&EmailConfig::default()).unwrap();
        let result = relay.send_design_email("teacher@example.com", b"").await;
        assert_eq!(result, Err(MailError::MissingAttachment));
    }

    #[tokio::test]
    async fn configured_relay_rejects_malformed_recipient_without_connecting() {
        let relay = SmtpMailRelay::from_config(&configured()).unwrap();
        assert!(relay.is_configured());

        let result = relay.send_design_email("not-an-address", b"%PDF-1.5").await;
        assert!(matches!(result, Err(MailError::InvalidRecipient(_))));
    }

    #[tokio::test]
    async fn starttls_port_builds_relay() {
        let config = EmailConfig {
            smtp_port: 587,
            ..configured()
        };
        assert!(SmtpMailRelay::from_config(&config).unwrap().is_configured());
    }

    #[test]
    fn malformed_sender_address_fails_construction() {
        let config = EmailConfig {
            smtp_username: Some("no-at-sign".to_string()),
            ..configured()
        };
        assert!(matches!(
            SmtpMailRelay::from_config(&config),
            Err(MailError::Transport(_))
        ));
    }

    #[test]
    fn message_carries_pdf_attachment() {
        let message = build_message(sender_mailbox(), "teacher@example.com", b"%PDF-1.5").unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("teacher@example.com"));
        assert!(raw.contains("lesson-plan.pdf"));
        assert!(raw.contains("application/pdf"));
        assert!(raw.contains("multipart/mixed"));
    }
}
