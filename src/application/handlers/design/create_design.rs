//! CreateDesignHandler - starts a new editing session.

use std::sync::Arc;

use crate::domain::curriculum::Catalog;
use crate::domain::foundation::DesignId;
use crate::domain::wizard::WizardController;
use crate::ports::DesignStore;

use super::{DesignError, DesignSnapshot};

/// Command to open a new design session.
#[derive(Debug, Clone, Default)]
pub struct CreateDesignCommand;

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateDesignResult {
    pub design_id: DesignId,
    pub snapshot: DesignSnapshot,
}

/// Handler for creating design sessions.
pub struct CreateDesignHandler {
    store: Arc<dyn DesignStore>,
    catalog: Arc<Catalog>,
}

impl CreateDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, _cmd: CreateDesignCommand) -> Result<CreateDesignResult, DesignError> {
        let design_id = DesignId::new();
        let controller = WizardController::new(self.catalog.clone());

        let handle = self.store.insert(design_id, controller).await?;
        let snapshot = {
            let controller = handle.lock().await;
            DesignSnapshot::capture(design_id, &controller)
        };

        tracing::info!(design_id = %design_id, "Design session created");

        Ok(CreateDesignResult {
            design_id,
            snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDesignStore;
    use crate::domain::foundation::WizardStep;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::embedded().unwrap().clone())
    }

    #[tokio::test]
    async fn creates_session_on_first_step() {
        let store = Arc::new(InMemoryDesignStore::new());
        let handler = CreateDesignHandler::new(store.clone(), catalog());

        let result = handler.handle(CreateDesignCommand).await.unwrap();

        assert_eq!(result.snapshot.id, result.design_id);
        assert_eq!(result.snapshot.step, WizardStep::Curriculum);
        assert!(!result.snapshot.can_advance);
        assert!(!result.snapshot.can_retreat);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn each_session_gets_its_own_id() {
        let store = Arc::new(InMemoryDesignStore::new());
        let handler = CreateDesignHandler::new(store.clone(), catalog());

        let a = handler.handle(CreateDesignCommand).await.unwrap();
        let b = handler.handle(CreateDesignCommand).await.unwrap();

        assert_ne!(a.design_id, b.design_id);
        assert_eq!(store.count().await, 2);
    }
}
