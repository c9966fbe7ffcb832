//! Pure projection of a DesignState into a RenderedDocument.

use super::rendered::*;
use crate::domain::design::{DesignState, GraspsField, QuestionKind};

fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn labeled(label: &'static str, value: Option<&str>) -> LabeledValue {
    LabeledValue {
        label,
        value: or_placeholder(value),
    }
}

/// Renders the review document for a design.
pub fn render(state: &DesignState) -> RenderedDocument {
    let subject_name = state.subject().map(|s| s.name.clone());
    let subtitle = format!(
        "{} | {}",
        or_placeholder(subject_name.as_deref()),
        or_placeholder(state.school_level().map(|l| l.display_name()))
    );

    let curricular_context = CurricularContext {
        heading: "1. 교육과정 맥락 (Curricular Context)",
        standards_label: "선택된 성취기준",
        standards: state
            .selected_standards()
            .iter()
            .map(|s| StandardLine {
                code: s.code.clone(),
                description: s.description.clone(),
            })
            .collect(),
    };

    let conceptual_foundation = ConceptualFoundation {
        heading: "2. 개념적 기반 (Conceptual Foundation)",
        topic: labeled("주제 (Topic)", state.topic()),
        conceptual_lens: labeled("개념적 렌즈 (Conceptual Lens)", state.conceptual_lens()),
        macro_concept: labeled("거시 개념 (Macro Concept)", state.macro_concept()),
        micro_concept: labeled("미시 개념 (Micro Concept)", state.micro_concept()),
        generalization: labeled("일반화 (Generalization Statement)", state.generalization()),
    };

    let inquiry_questions = InquiryQuestionsSection {
        heading: "3. 탐구 질문 (Inquiry Questions)",
        groups: QuestionKind::all()
            .iter()
            .map(|kind| QuestionGroup {
                kind: *kind,
                label: kind.document_label(),
                focus: kind.focus(),
                questions: state.questions().list(*kind).to_vec(),
            })
            .collect(),
    };

    let assessment = AssessmentSection {
        heading: "4. 수행평가 설계 (GRASPS Assessment)",
        cells: GraspsField::all()
            .iter()
            .map(|field| GraspsCell {
                field: *field,
                key: field.key(),
                value: or_placeholder(state.grasps().map(|g| g.get(*field))),
            })
            .collect(),
    };

    RenderedDocument {
        title: DOCUMENT_TITLE.to_string(),
        subtitle,
        subject_name,
        curricular_context,
        conceptual_foundation,
        inquiry_questions,
        assessment,
    }
}
