//! Sidebar progress summary derived from a DesignState.

use serde::Serialize;

use super::questions::QuestionKind;
use super::state::DesignState;

/// Per-kind question counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionCounts {
    pub factual: usize,
    pub conceptual: usize,
    pub debatable: usize,
}

/// Which parts of the design have content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignProgress {
    pub has_subject: bool,
    pub has_concept: bool,
    pub has_questions: bool,
    pub has_assessment: bool,
    pub selected_standard_count: usize,
    pub question_counts: QuestionCounts,
}

impl DesignProgress {
    pub fn from_state(state: &DesignState) -> Self {
        let questions = state.questions();
        let has_concept = [state.topic(), state.macro_concept(), state.micro_concept()]
            .iter()
            .any(|v| v.map_or(false, |s| !s.is_empty()));
        let has_assessment = state
            .grasps()
            .map_or(false, |g| !g.goal.is_empty() || !g.role.is_empty());

        Self {
            has_subject: state.subject().is_some(),
            has_concept,
            has_questions: !questions.is_empty(),
            has_assessment,
            selected_standard_count: state.selected_standards().len(),
            question_counts: QuestionCounts {
                factual: questions.count(QuestionKind::Factual),
                conceptual: questions.count(QuestionKind::Conceptual),
                debatable: questions.count(QuestionKind::Debatable),
            },
        }
    }
}
