//! RelayMailHandler - the raw mail submission endpoint's command.

use std::sync::Arc;

use crate::ports::{MailError, MailRelay};

/// A submitted form; either part may be missing.
#[derive(Debug, Clone, Default)]
pub struct RelayMailCommand {
    pub recipient: Option<String>,
    pub pdf: Option<Vec<u8>>,
}

pub struct RelayMailHandler {
    mail: Arc<dyn MailRelay>,
}

impl RelayMailHandler {
    pub fn new(mail: Arc<dyn MailRelay>) -> Self {
        Self { mail }
    }

    pub async fn handle(&self, cmd: RelayMailCommand) -> Result<(), MailError> {
        let (Some(recipient), Some(pdf)) = (cmd.recipient, cmd.pdf) else {
            return Err(MailError::MissingAttachment);
        };

        self.mail.send_design_email(recipient.trim(), &pdf).await?;
        tracing::info!(pdf_bytes = pdf.len(), "Submitted PDF relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingMailRelay {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MailRelay for RecordingMailRelay {
        async fn send_design_email(&self, recipient: &str, pdf: &[u8]) -> Result<(), MailError> {
            crate::ports::check_submission(recipient, pdf)?;
            self.sent.lock().unwrap().push(recipient.to_string());
            Ok(())
        }
    }

    fn handler() -> (RelayMailHandler, Arc<RecordingMailRelay>) {
        let relay = Arc::new(RecordingMailRelay {
            sent: Mutex::new(Vec::new()),
        });
        (RelayMailHandler::new(relay.clone()), relay)
    }

    #[tokio::test]
    async fn relays_complete_submission() {
        let (handler, relay) = handler();
        handler
            .handle(RelayMailCommand {
                recipient: Some("teacher@example.com".into()),
                pdf: Some(b"%PDF".to_vec()),
            })
            .await
            .unwrap();
        assert_eq!(
            *relay.sent.lock().unwrap(),
            vec!["teacher@example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_parts_are_rejected() {
        let (handler, relay) = handler();

        let no_file = handler
            .handle(RelayMailCommand {
                recipient: Some("teacher@example.com".into()),
                pdf: None,
            })
            .await;
        let no_email = handler
            .handle(RelayMailCommand {
                recipient: None,
                pdf: Some(b"%PDF".to_vec()),
            })
            .await;

        assert_eq!(no_file, Err(MailError::MissingAttachment));
        assert_eq!(no_email, Err(MailError::MissingAttachment));
        assert!(relay.sent.lock().unwrap().is_empty());
    }
}
