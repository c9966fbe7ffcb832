//! NavigateDesignHandler - moves a session between wizard steps.
//!
//! A blocked advance is not an error: the snapshot simply reports that the
//! step did not change.

use std::sync::Arc;

use crate::domain::foundation::DesignId;
use crate::ports::DesignStore;

use super::{DesignError, DesignSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
}

/// Command to move one step.
#[derive(Debug, Clone)]
pub struct NavigateDesignCommand {
    pub design_id: DesignId,
    pub direction: Direction,
}

/// Result of navigation.
#[derive(Debug, Clone)]
pub struct NavigateDesignResult {
    /// Whether the current step changed.
    pub moved: bool,
    pub snapshot: DesignSnapshot,
}

pub struct NavigateDesignHandler {
    store: Arc<dyn DesignStore>,
}

impl NavigateDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: NavigateDesignCommand,
    ) -> Result<NavigateDesignResult, DesignError> {
        let handle = self.store.get(cmd.design_id).await?;
        let mut controller = handle.lock().await;
        let from = controller.current_step();

        let moved = match cmd.direction {
            Direction::Advance => controller.advance(),
            Direction::Retreat => controller.retreat(),
        };

        let to = controller.current_step();
        match (cmd.direction, moved) {
            (Direction::Advance, true) => {
                tracing::info!(design_id = %cmd.design_id, from = %from, to = %to, "Step advanced")
            }
            (Direction::Advance, false) => {
                tracing::debug!(design_id = %cmd.design_id, step = %from, "Advance blocked")
            }
            (Direction::Retreat, true) => {
                tracing::info!(design_id = %cmd.design_id, from = %from, to = %to, "Step retreated")
            }
            (Direction::Retreat, false) => {}
        }

        Ok(NavigateDesignResult {
            moved,
            snapshot: DesignSnapshot::capture(cmd.design_id, &controller),
        })
    }
}
