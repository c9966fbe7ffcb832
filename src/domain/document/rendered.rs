//! RenderedDocument - the display tree of a finished unit design.
//!
//! Every field is always present. Empty text carries the [`PLACEHOLDER`]
//! and empty question lists stay as empty lists, so the exported document
//! has the same shape however complete the design is.

use serde::Serialize;

use crate::domain::design::{GraspsField, QuestionKind};

/// Shown wherever a text value is missing.
pub const PLACEHOLDER: &str = "-";

pub const DOCUMENT_TITLE: &str = "Concept-Based Inquiry Design";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    /// `{subject} | {school level}`.
    pub subtitle: String,
    /// Raw subject name, used for the download filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    pub curricular_context: CurricularContext,
    pub conceptual_foundation: ConceptualFoundation,
    pub inquiry_questions: InquiryQuestionsSection,
    pub assessment: AssessmentSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurricularContext {
    pub heading: &'static str,
    pub standards_label: &'static str,
    pub standards: Vec<StandardLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardLine {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptualFoundation {
    pub heading: &'static str,
    pub topic: LabeledValue,
    pub conceptual_lens: LabeledValue,
    pub macro_concept: LabeledValue,
    pub micro_concept: LabeledValue,
    pub generalization: LabeledValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryQuestionsSection {
    pub heading: &'static str,
    /// Always factual, conceptual, debatable.
    pub groups: Vec<QuestionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionGroup {
    pub kind: QuestionKind,
    pub label: &'static str,
    pub focus: &'static str,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSection {
    pub heading: &'static str,
    /// Always the six GRASPS cells in template order.
    pub cells: Vec<GraspsCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraspsCell {
    pub field: GraspsField,
    pub key: &'static str,
    pub value: String,
}
