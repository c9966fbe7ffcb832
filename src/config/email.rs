//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (SMTP, or a remote relay endpoint)
///
/// Missing credentials do not fail startup; the relay reports them when a
/// send is attempted.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP server host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP port; 465 uses implicit TLS, anything else STARTTLS
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP login, also used as the sender address
    pub smtp_username: Option<String>,

    /// SMTP password (an app password for Gmail)
    pub smtp_password: Option<SecretString>,

    /// Display name of the sender
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// When set, mail is posted to this endpoint instead of sent over SMTP
    pub relay_url: Option<String>,
}

impl EmailConfig {
    /// True when both SMTP username and password are present
    pub fn has_credentials(&self) -> bool {
        let user = self.smtp_username.as_deref().map_or(false, |u| !u.is_empty());
        let pass = self
            .smtp_password
            .as_ref()
            .map_or(false, |p| !p.expose_secret().is_empty());
        user && pass
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smtp_host.trim().is_empty() {
            return Err(ValidationError::MissingSmtpHost);
        }
        if let Some(url) = &self.relay_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ValidationError::InvalidRelayUrl);
            }
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_name: default_from_name(),
            relay_url: None,
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_from_name() -> String {
    "Concept Design".to_string()
}
