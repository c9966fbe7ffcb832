//! HTTP DTOs for the read-only reference endpoints.

use serde::Serialize;

use crate::domain::curriculum::{AchievementStandard, StandardGroup, Subject};
use crate::domain::design::{GraspsField, QuestionKind, COMMON_LENSES, MACRO_CONCEPT_EXAMPLES};
use crate::domain::foundation::SchoolLevel;

/// Subjects offered at one school level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelSubjectsResponse {
    pub level: SchoolLevel,
    pub level_name: &'static str,
    pub subjects: Vec<Subject>,
}

/// One display group of standards.
#[derive(Debug, Clone, Serialize)]
pub struct StandardGroupResponse {
    pub name: String,
    pub standards: Vec<AchievementStandard>,
}

impl From<StandardGroup<'_>> for StandardGroupResponse {
    fn from(group: StandardGroup<'_>) -> Self {
        Self {
            name: group.name.to_string(),
            standards: group.standards.into_iter().cloned().collect(),
        }
    }
}

/// Standards of a subject, grouped for the step 1 picker.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectStandardsResponse {
    pub subject_id: String,
    pub subject_name: String,
    pub groups: Vec<StandardGroupResponse>,
    /// Offered only when the subject has no catalog standards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_standard: Option<AchievementStandard>,
}

impl From<&Subject> for SubjectStandardsResponse {
    fn from(subject: &Subject) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            groups: subject
                .grouped_standards()
                .into_iter()
                .map(StandardGroupResponse::from)
                .collect(),
            custom_standard: subject
                .requires_custom_standard()
                .then(AchievementStandard::custom),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionKindGuide {
    pub kind: QuestionKind,
    pub label: &'static str,
    pub short_label: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub focus: &'static str,
}

impl From<QuestionKind> for QuestionKindGuide {
    fn from(kind: QuestionKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            short_label: kind.short_label(),
            description: kind.description(),
            example: kind.example(),
            focus: kind.focus(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraspsFieldGuide {
    pub field: GraspsField,
    pub key: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
    pub placeholder: &'static str,
}

impl From<GraspsField> for GraspsFieldGuide {
    fn from(field: GraspsField) -> Self {
        Self {
            field,
            key: field.key(),
            label: field.label(),
            prompt: field.prompt(),
            placeholder: field.placeholder(),
        }
    }
}

/// Vocabulary and guidance for steps 2 to 4.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub conceptual_lenses: Vec<&'static str>,
    pub macro_concepts: Vec<&'static str>,
    pub question_kinds: Vec<QuestionKindGuide>,
    pub grasps_fields: Vec<GraspsFieldGuide>,
}

impl SuggestionsResponse {
    pub fn build() -> Self {
        Self {
            conceptual_lenses: COMMON_LENSES.to_vec(),
            macro_concepts: MACRO_CONCEPT_EXAMPLES.to_vec(),
            question_kinds: QuestionKind::all().iter().copied().map(Into::into).collect(),
            grasps_fields: GraspsField::all().iter().copied().map(Into::into).collect(),
        }
    }
}
