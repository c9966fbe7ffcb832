//! EmailDesignHandler - exports a session to PDF and mails it.

use std::sync::Arc;

use crate::domain::foundation::DesignId;
use crate::ports::{MailError, MailRelay};

use super::super::design::DesignError;
use super::{ExportDesignHandler, ExportPipeline};

/// Command to email a session's PDF.
#[derive(Debug, Clone)]
pub struct EmailDesignCommand {
    pub design_id: DesignId,
    pub recipient: String,
}

pub struct EmailDesignHandler {
    exporter: Arc<ExportDesignHandler>,
    pipeline: Arc<ExportPipeline>,
    mail: Arc<dyn MailRelay>,
}

impl EmailDesignHandler {
    pub fn new(
        exporter: Arc<ExportDesignHandler>,
        pipeline: Arc<ExportPipeline>,
        mail: Arc<dyn MailRelay>,
    ) -> Self {
        Self {
            exporter,
            pipeline,
            mail,
        }
    }

    /// Runs the export to completion, then hands the bytes to the relay.
    pub async fn handle(&self, cmd: EmailDesignCommand) -> Result<(), DesignError> {
        if cmd.recipient.trim().is_empty() {
            return Err(MailError::MissingAttachment.into());
        }

        let document = self.exporter.render(cmd.design_id).await?;
        let pdf = self.pipeline.export_pdf(&document).await?;

        self.mail
            .send_design_email(cmd.recipient.trim(), &pdf)
            .await
            .map_err(|e| {
                tracing::warn!(design_id = %cmd.design_id, error = %e, "Design email failed");
                e
            })?;

        tracing::info!(design_id = %cmd.design_id, pdf_bytes = pdf.len(), "Design emailed");
        Ok(())
    }
}
