//! GetDesignHandler - Query handler for a session snapshot.

use std::sync::Arc;

use crate::domain::foundation::DesignId;
use crate::ports::DesignStore;

use super::{DesignError, DesignSnapshot};

/// Query to read one session.
#[derive(Debug, Clone)]
pub struct GetDesignQuery {
    pub design_id: DesignId,
}

pub struct GetDesignHandler {
    store: Arc<dyn DesignStore>,
}

impl GetDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDesignQuery) -> Result<DesignSnapshot, DesignError> {
        let handle = self.store.get(query.design_id).await?;
        let controller = handle.lock().await;
        Ok(DesignSnapshot::capture(query.design_id, &controller))
    }
}
