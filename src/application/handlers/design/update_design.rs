//! UpdateDesignHandler - applies one edit to a session's DesignState.
//!
//! Every edit runs inside the session lock, so the merge and the
//! generalization refresh are observed together.

use std::sync::Arc;

use crate::domain::curriculum::CUSTOM_STANDARD_CODE;
use crate::domain::design::{DesignUpdate, GraspsField, QuestionKind};
use crate::domain::foundation::{DesignId, SchoolLevel};
use crate::ports::DesignStore;

use super::{DesignError, DesignSnapshot};

/// One edit a step editor can make.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignChange {
    /// Shallow merge of a partial state.
    Merge(DesignUpdate),
    SelectSchoolLevel(Option<SchoolLevel>),
    SelectSubject(String),
    ToggleStandard(String),
    /// Toggles the user-defined standard of a subject without catalog entries.
    ToggleCustomStandard,
    AddQuestion { kind: QuestionKind, text: String },
    RemoveQuestion { kind: QuestionKind, index: usize },
    SetGraspsField { field: GraspsField, value: String },
}

impl DesignChange {
    fn name(&self) -> &'static str {
        match self {
            DesignChange::Merge(_) => "merge",
            DesignChange::SelectSchoolLevel(_) => "select_school_level",
            DesignChange::SelectSubject(_) => "select_subject",
            DesignChange::ToggleStandard(_) => "toggle_standard",
            DesignChange::ToggleCustomStandard => "toggle_custom_standard",
            DesignChange::AddQuestion { .. } => "add_question",
            DesignChange::RemoveQuestion { .. } => "remove_question",
            DesignChange::SetGraspsField { .. } => "set_grasps_field",
        }
    }
}

/// Command to edit a session.
#[derive(Debug, Clone)]
pub struct UpdateDesignCommand {
    pub design_id: DesignId,
    pub change: DesignChange,
}

pub struct UpdateDesignHandler {
    store: Arc<dyn DesignStore>,
}

impl UpdateDesignHandler {
    pub fn new(store: Arc<dyn DesignStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateDesignCommand) -> Result<DesignSnapshot, DesignError> {
        let handle = self.store.get(cmd.design_id).await?;
        let mut controller = handle.lock().await;
        let change = cmd.change.name();

        match cmd.change {
            DesignChange::Merge(update) => controller.apply_update(update)?,
            DesignChange::SelectSchoolLevel(level) => controller.select_school_level(level),
            DesignChange::SelectSubject(subject_id) => controller.select_subject(&subject_id)?,
            DesignChange::ToggleStandard(code) => {
                controller.toggle_standard(&code)?;
            }
            DesignChange::ToggleCustomStandard => {
                controller.toggle_standard(CUSTOM_STANDARD_CODE)?;
            }
            DesignChange::AddQuestion { kind, text } => {
                controller.add_question(kind, text);
            }
            DesignChange::RemoveQuestion { kind, index } => {
                controller.remove_question(kind, index);
            }
            DesignChange::SetGraspsField { field, value } => {
                controller.set_grasps_field(field, value)
            }
        }

        tracing::debug!(design_id = %cmd.design_id, change, "Design updated");

        Ok(DesignSnapshot::capture(cmd.design_id, &controller))
    }
}
