//! HTTP DTOs for design session endpoints.
//!
//! Request bodies are per-editor; every successful edit replies with the
//! full settled view so the client never recomputes derived fields.

use serde::{Deserialize, Serialize};

use crate::application::DesignSnapshot;
use crate::domain::design::{DesignProgress, DesignState, QuestionKind};
use crate::domain::foundation::{SchoolLevel, WizardStep};
use crate::domain::wizard::StepOverview;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `null` clears the level (and with it subject and standards).
#[derive(Debug, Clone, Deserialize)]
pub struct SelectSchoolLevelRequest {
    pub school_level: Option<SchoolLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectSubjectRequest {
    pub subject_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleStandardRequest {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddQuestionRequest {
    pub kind: QuestionKind,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetGraspsFieldRequest {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailDesignRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Settled view of one session.
#[derive(Debug, Clone, Serialize)]
pub struct DesignResponse {
    pub id: String,
    pub step: WizardStep,
    pub step_number: u8,
    pub state: DesignState,
    pub steps: Vec<StepOverview>,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub progress: DesignProgress,
    pub progress_ratio: f64,
    pub updated_at: String,
}

impl From<DesignSnapshot> for DesignResponse {
    fn from(snapshot: DesignSnapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            step: snapshot.step,
            step_number: snapshot.step.number(),
            state: snapshot.state,
            steps: snapshot.steps,
            can_advance: snapshot.can_advance,
            can_retreat: snapshot.can_retreat,
            progress: snapshot.progress,
            progress_ratio: snapshot.progress_ratio,
            updated_at: snapshot.captured_at.to_rfc3339(),
        }
    }
}

/// Reply to advance / retreat.
#[derive(Debug, Clone, Serialize)]
pub struct NavigateResponse {
    /// False when the step was blocked or already at the boundary.
    pub moved: bool,
    pub design: DesignResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn school_level_request_accepts_null() {
        let req: SelectSchoolLevelRequest =
            serde_json::from_value(json!({ "school_level": null })).unwrap();
        assert_eq!(req.school_level, None);

        let req: SelectSchoolLevelRequest =
            serde_json::from_value(json!({ "school_level": "high" })).unwrap();
        assert_eq!(req.school_level, Some(SchoolLevel::High));
    }

    #[test]
    fn add_question_request_parses_kind() {
        let req: AddQuestionRequest =
            serde_json::from_value(json!({ "kind": "debatable", "text": "Q" })).unwrap();
        assert_eq!(req.kind, QuestionKind::Debatable);
    }

    #[test]
    fn email_request_defaults_to_empty() {
        let req: EmailDesignRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.email.is_empty());
    }
}
