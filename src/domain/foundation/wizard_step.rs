//! WizardStep enum representing the five lesson design phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five wizard steps, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Curriculum,
    ConceptDesign,
    InquiryQuestions,
    Assessment,
    Review,
}

impl WizardStep {
    /// Total number of steps.
    pub const COUNT: u8 = 5;

    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Curriculum,
            WizardStep::ConceptDesign,
            WizardStep::InquiryQuestions,
            WizardStep::Assessment,
            WizardStep::Review,
        ]
    }

    /// Returns the 1-based step number shown to users.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Curriculum => 1,
            WizardStep::ConceptDesign => 2,
            WizardStep::InquiryQuestions => 3,
            WizardStep::Assessment => 4,
            WizardStep::Review => 5,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<WizardStep> {
        Self::all().iter().copied().find(|s| s.number() == number)
    }

    /// Returns the next step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_number(self.number() + 1)
    }

    /// Returns the previous step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn first() -> WizardStep {
        WizardStep::Curriculum
    }

    pub fn last() -> WizardStep {
        WizardStep::Review
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    /// Returns the short step title.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Curriculum => "교육과정",
            WizardStep::ConceptDesign => "개념 설계",
            WizardStep::InquiryQuestions => "탐구 질문",
            WizardStep::Assessment => "평가",
            WizardStep::Review => "검토",
        }
    }

    /// Returns the one-line step description.
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Curriculum => "교과 및 성취기준 선택",
            WizardStep::ConceptDesign => "개념 및 렌즈 설정",
            WizardStep::InquiryQuestions => "질문 만들기",
            WizardStep::Assessment => "GRASPS 설계",
            WizardStep::Review => "최종 확인",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
