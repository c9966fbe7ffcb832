//! Step validators gating wizard advancement.

use super::state::DesignState;
use crate::domain::foundation::WizardStep;

fn present(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// Whether the wizard may advance past `step`.
///
/// Step numbers outside 1..=5 are treated as valid.
pub fn is_step_valid(step: u8, state: &DesignState) -> bool {
    WizardStep::from_number(step).map_or(true, |s| is_valid_for(s, state))
}

pub fn is_valid_for(step: WizardStep, state: &DesignState) -> bool {
    match step {
        WizardStep::Curriculum => {
            state.subject().is_some() && !state.selected_standards().is_empty()
        }
        WizardStep::ConceptDesign => {
            present(state.topic())
                && present(state.conceptual_lens())
                && present(state.macro_concept())
                && present(state.micro_concept())
        }
        WizardStep::InquiryQuestions => !state.questions().is_empty(),
        WizardStep::Assessment | WizardStep::Review => true,
    }
}
