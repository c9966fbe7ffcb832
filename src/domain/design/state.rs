//! DesignState aggregate - one editing session's unit design.
//!
//! Curriculum selections cascade: changing the school level clears the
//! subject and standards, changing the subject clears the standards.
//! Mutations live behind `pub(crate)` so the wizard controller is the only
//! writer and can settle the derived generalization after every merge.

use serde::Serialize;

use super::generalization;
use super::grasps::{Grasps, GraspsField};
use super::questions::{InquiryQuestions, QuestionKind};
use crate::domain::curriculum::{AchievementStandard, Catalog, Subject, CUSTOM_STANDARD_CODE};
use crate::domain::foundation::{DomainError, ErrorCode, SchoolLevel};

/// The mutable unit-design aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignState {
    school_level: Option<SchoolLevel>,
    subject: Option<Subject>,
    selected_standards: Vec<AchievementStandard>,
    topic: Option<String>,
    conceptual_lens: Option<String>,
    macro_concept: Option<String>,
    micro_concept: Option<String>,
    generalization: Option<String>,
    questions: InquiryQuestions,
    grasps: Option<Grasps>,
}

/// Empty text is stored as absent.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl DesignState {
    /// Creates the empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn school_level(&self) -> Option<SchoolLevel> {
        self.school_level
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn selected_standards(&self) -> &[AchievementStandard] {
        &self.selected_standards
    }

    pub fn is_standard_selected(&self, code: &str) -> bool {
        self.selected_standards.iter().any(|s| s.code == code)
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn conceptual_lens(&self) -> Option<&str> {
        self.conceptual_lens.as_deref()
    }

    pub fn macro_concept(&self) -> Option<&str> {
        self.macro_concept.as_deref()
    }

    pub fn micro_concept(&self) -> Option<&str> {
        self.micro_concept.as_deref()
    }

    pub fn generalization(&self) -> Option<&str> {
        self.generalization.as_deref()
    }

    pub fn questions(&self) -> &InquiryQuestions {
        &self.questions
    }

    pub fn grasps(&self) -> Option<&Grasps> {
        self.grasps.as_ref()
    }

    /// Tuple of the generalization sources, used to detect changes.
    pub(crate) fn concept_sources(&self) -> (Option<String>, Option<String>, Option<String>) {
        (
            self.conceptual_lens.clone(),
            self.macro_concept.clone(),
            self.micro_concept.clone(),
        )
    }

    // ───────────────────────────────────────────────────────────────
    // Curriculum selection
    // ───────────────────────────────────────────────────────────────

    /// Sets (or clears) the school level, always resetting subject and standards.
    pub(crate) fn select_school_level(&mut self, level: Option<SchoolLevel>) {
        self.school_level = level;
        self.subject = None;
        self.selected_standards.clear();
    }

    /// Selects a subject of the current school level, resetting standards.
    pub(crate) fn select_subject(
        &mut self,
        catalog: &Catalog,
        subject_id: &str,
    ) -> Result<(), DomainError> {
        let level = self.school_level.ok_or_else(|| {
            DomainError::new(
                ErrorCode::SchoolLevelRequired,
                "A school level must be selected before a subject",
            )
        })?;
        let subject = catalog.subject(level, subject_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SubjectNotFound,
                format!("Subject '{}' is not offered at {}", subject_id, level),
            )
            .with_detail("subject_id", subject_id)
            .with_detail("school_level", level.as_str())
        })?;

        self.subject = Some(subject.clone());
        self.selected_standards.clear();
        Ok(())
    }

    pub(crate) fn clear_subject(&mut self) {
        self.subject = None;
        self.selected_standards.clear();
    }

    fn require_subject(&self) -> Result<&Subject, DomainError> {
        self.subject.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::SubjectRequired,
                "A subject must be selected before choosing standards",
            )
        })
    }

    /// Resolves a code against the current subject, synthesizing CUSTOM when allowed.
    fn resolve_standard(&self, code: &str) -> Result<AchievementStandard, DomainError> {
        let subject = self.require_subject()?;

        if code == CUSTOM_STANDARD_CODE {
            if subject.requires_custom_standard() {
                return Ok(AchievementStandard::custom());
            }
            return Err(DomainError::new(
                ErrorCode::CustomStandardUnavailable,
                format!(
                    "Subject '{}' has catalog standards; a custom standard is not offered",
                    subject.id
                ),
            )
            .with_detail("subject_id", subject.id.clone()));
        }

        subject.standard(code).cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::StandardNotFound,
                format!("Standard '{}' does not belong to '{}'", code, subject.id),
            )
            .with_detail("code", code)
            .with_detail("subject_id", subject.id.clone())
        })
    }

    /// Adds the standard if absent, removes it if present.
    ///
    /// Returns whether the standard is selected afterwards.
    pub(crate) fn toggle_standard(&mut self, code: &str) -> Result<bool, DomainError> {
        let standard = self.resolve_standard(code)?;

        if let Some(pos) = self
            .selected_standards
            .iter()
            .position(|s| s.code == standard.code)
        {
            self.selected_standards.remove(pos);
            Ok(false)
        } else {
            self.selected_standards.push(standard);
            Ok(true)
        }
    }

    /// Replaces the selection; duplicate codes collapse to their first occurrence.
    pub(crate) fn set_selected_standards(&mut self, codes: &[String]) -> Result<(), DomainError> {
        let mut selected: Vec<AchievementStandard> = Vec::with_capacity(codes.len());
        for code in codes {
            if selected.iter().any(|s| &s.code == code) {
                continue;
            }
            selected.push(self.resolve_standard(code)?);
        }
        self.selected_standards = selected;
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Concepts
    // ───────────────────────────────────────────────────────────────

    pub(crate) fn set_topic(&mut self, value: String) {
        self.topic = non_empty(value);
    }

    pub(crate) fn set_conceptual_lens(&mut self, value: String) {
        self.conceptual_lens = non_empty(value);
    }

    pub(crate) fn set_macro_concept(&mut self, value: String) {
        self.macro_concept = non_empty(value);
    }

    pub(crate) fn set_micro_concept(&mut self, value: String) {
        self.micro_concept = non_empty(value);
    }

    /// Re-derives the generalization from its three sources.
    pub(crate) fn refresh_generalization(&mut self) {
        self.generalization = generalization::recompute(
            self.conceptual_lens.as_deref(),
            self.macro_concept.as_deref(),
            self.micro_concept.as_deref(),
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Questions and assessment
    // ───────────────────────────────────────────────────────────────

    pub(crate) fn add_question(&mut self, kind: QuestionKind, text: String) -> bool {
        self.questions.add(kind, text)
    }

    pub(crate) fn remove_question(&mut self, kind: QuestionKind, index: usize) -> Option<String> {
        self.questions.remove(kind, index)
    }

    /// Replaces a list, dropping blank entries.
    pub(crate) fn replace_questions(&mut self, kind: QuestionKind, questions: Vec<String>) {
        let kept = questions
            .into_iter()
            .filter(|q| !q.trim().is_empty())
            .collect();
        self.questions.replace(kind, kept);
    }

    pub(crate) fn set_grasps_field(&mut self, field: GraspsField, value: String) {
        self.grasps.get_or_insert_with(Grasps::default).set(field, value);
    }

    pub(crate) fn set_grasps(&mut self, grasps: Grasps) {
        self.grasps = Some(grasps);
    }
}
