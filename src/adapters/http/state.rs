//! Shared application state for all HTTP modules.

use std::sync::Arc;

use crate::application::{
    CreateDesignHandler, DeleteDesignHandler, EmailDesignHandler, ExportDesignHandler,
    ExportPipeline, GetDesignHandler, NavigateDesignHandler, RelayMailHandler,
    UpdateDesignHandler,
};
use crate::domain::curriculum::Catalog;
use crate::ports::{DesignStore, DocumentRasterizer, MailRelay, PdfAssembler};

/// Arc-wrapped dependencies, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub design_store: Arc<dyn DesignStore>,
    pub rasterizer: Arc<dyn DocumentRasterizer>,
    pub pdf_assembler: Arc<dyn PdfAssembler>,
    pub mail_relay: Arc<dyn MailRelay>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        design_store: Arc<dyn DesignStore>,
        rasterizer: Arc<dyn DocumentRasterizer>,
        pdf_assembler: Arc<dyn PdfAssembler>,
        mail_relay: Arc<dyn MailRelay>,
    ) -> Self {
        Self {
            catalog,
            design_store,
            rasterizer,
            pdf_assembler,
            mail_relay,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_design_handler(&self) -> CreateDesignHandler {
        CreateDesignHandler::new(self.design_store.clone(), self.catalog.clone())
    }

    pub fn get_design_handler(&self) -> GetDesignHandler {
        GetDesignHandler::new(self.design_store.clone())
    }

    pub fn update_design_handler(&self) -> UpdateDesignHandler {
        UpdateDesignHandler::new(self.design_store.clone())
    }

    pub fn navigate_design_handler(&self) -> NavigateDesignHandler {
        NavigateDesignHandler::new(self.design_store.clone())
    }

    pub fn delete_design_handler(&self) -> DeleteDesignHandler {
        DeleteDesignHandler::new(self.design_store.clone())
    }

    fn export_pipeline(&self) -> Arc<ExportPipeline> {
        Arc::new(ExportPipeline::new(
            self.rasterizer.clone(),
            self.pdf_assembler.clone(),
        ))
    }

    pub fn export_design_handler(&self) -> ExportDesignHandler {
        ExportDesignHandler::new(self.design_store.clone(), self.export_pipeline())
    }

    pub fn email_design_handler(&self) -> EmailDesignHandler {
        let pipeline = self.export_pipeline();
        let exporter = Arc::new(ExportDesignHandler::new(
            self.design_store.clone(),
            pipeline.clone(),
        ));
        EmailDesignHandler::new(exporter, pipeline, self.mail_relay.clone())
    }

    pub fn relay_mail_handler(&self) -> RelayMailHandler {
        RelayMailHandler::new(self.mail_relay.clone())
    }
}
