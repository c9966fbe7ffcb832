//! DesignSnapshot - settled read model of one session.

use serde::Serialize;

use crate::domain::design::{DesignProgress, DesignState};
use crate::domain::foundation::{DesignId, Timestamp, WizardStep};
use crate::domain::wizard::{StepOverview, WizardController};

/// Everything a client needs to draw the wizard after an operation.
#[derive(Debug, Clone, Serialize)]
pub struct DesignSnapshot {
    pub id: DesignId,
    pub step: WizardStep,
    pub state: DesignState,
    pub steps: Vec<StepOverview>,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub progress: DesignProgress,
    pub progress_ratio: f64,
    pub captured_at: Timestamp,
}

impl DesignSnapshot {
    /// Copies the controller's state; the caller holds the session lock.
    pub fn capture(id: DesignId, controller: &WizardController) -> Self {
        Self {
            id,
            step: controller.current_step(),
            state: controller.state().clone(),
            steps: controller.steps(),
            can_advance: controller.can_advance(),
            can_retreat: controller.can_retreat(),
            progress: controller.progress(),
            progress_ratio: controller.progress_ratio(),
            captured_at: Timestamp::now(),
        }
    }
}
