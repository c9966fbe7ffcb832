//! DeleteDesignHandler - discards a session.

use std::sync::Arc;

use crate::domain::foundation::DesignId;
use crate::ports::DesignStore;

use super::DesignError;

#[derive(Debug, Clone)]
pub struct DeleteDesignCommand {
    pub design_id: DesignId,
}

pub struct DeleteDesignHandler {
    store: Arc<dyn DesignStore>,
}

impl DeleteDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteDesignCommand) -> Result<(), DesignError> {
        self.store.remove(cmd.design_id).await?;
        tracing::info!(design_id = %cmd.design_id, "Design session discarded");
        Ok(())
    }
}
