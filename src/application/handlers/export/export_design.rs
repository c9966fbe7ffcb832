//! ExportDesignHandler - Query handler producing a downloadable document.

use std::sync::Arc;

use crate::domain::document::{render, to_html, RenderedDocument};
use crate::domain::export::download_basename;
use crate::domain::foundation::DesignId;
use crate::ports::{DesignStore, ExportFormat, ExportedDocument};

use super::super::design::DesignError;
use super::ExportPipeline;

/// Query to export a session's document.
#[derive(Debug, Clone)]
pub struct ExportDesignQuery {
    pub design_id: DesignId,
    pub format: ExportFormat,
}

pub struct ExportDesignHandler {
    store: Arc<dyn DesignStore>,
    pipeline: Arc<ExportPipeline>,
}

impl ExportDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>, pipeline: Arc<ExportPipeline>) -> Self {
        Self { store, pipeline }
    }

    /// Renders the session's current state.
    ///
    /// The state is copied under the session lock and the lock released
    /// before any capture starts.
    pub async fn render(&self, design_id: DesignId) -> Result<RenderedDocument, DesignError> {
        let handle = self.store.get(design_id).await?;
        let state = handle.lock().await.state().clone();
        Ok(render(&state))
    }

    pub async fn handle(&self, query: ExportDesignQuery) -> Result<ExportedDocument, DesignError> {
        let document = self.render(query.design_id).await?;
        let basename = download_basename(document.subject_name.as_deref());

        let exported = match query.format {
            ExportFormat::Html => ExportedDocument::from_html(to_html(&document), &basename),
            ExportFormat::Pdf => {
                let pdf = self.pipeline.export_pdf(&document).await?;
                ExportedDocument::from_pdf(pdf, &basename)
            }
        };

        tracing::info!(
            design_id = %query.design_id,
            format = %query.format,
            filename = %exported.filename,
            "Design exported"
        );
        Ok(exported)
    }
}
