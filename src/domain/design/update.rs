//! Partial updates merged into a DesignState.

use serde::{Deserialize, Deserializer};

use super::grasps::Grasps;
use super::questions::QuestionKind;
use super::state::DesignState;
use crate::domain::curriculum::Catalog;
use crate::domain::foundation::{DomainError, SchoolLevel};

/// Distinguishes an absent field from an explicit `null`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A partial DesignState; every present field replaces the stored value.
///
/// `school_level` and `subject_id` accept `null` to clear the selection.
/// Subjects and standards are referenced by id/code and resolved against
/// the catalog. The generalization is never part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignUpdate {
    #[serde(deserialize_with = "explicit_null")]
    pub school_level: Option<Option<SchoolLevel>>,
    #[serde(deserialize_with = "explicit_null")]
    pub subject_id: Option<Option<String>>,
    pub selected_standards: Option<Vec<String>>,
    pub topic: Option<String>,
    pub conceptual_lens: Option<String>,
    pub macro_concept: Option<String>,
    pub micro_concept: Option<String>,
    pub factual_questions: Option<Vec<String>>,
    pub conceptual_questions: Option<Vec<String>>,
    pub debatable_questions: Option<Vec<String>>,
    pub grasps: Option<Grasps>,
}

/// What a merge touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub concept_sources_changed: bool,
}

impl DesignUpdate {
    pub fn is_empty(&self) -> bool {
        self == &DesignUpdate::default()
    }

    /// Merges into `state` all-or-nothing.
    ///
    /// Fields apply in dependency order (level, subject, standards, then
    /// free text) so that a single update can select a level, a subject of
    /// that level and standards of that subject. On error the state is left
    /// untouched.
    pub(crate) fn merge_into(
        self,
        state: &mut DesignState,
        catalog: &Catalog,
    ) -> Result<MergeOutcome, DomainError> {
        let before = state.concept_sources();
        let mut next = state.clone();

        if let Some(level) = self.school_level {
            next.select_school_level(level);
        }
        match self.subject_id {
            Some(Some(id)) => next.select_subject(catalog, &id)?,
            Some(None) => next.clear_subject(),
            None => {}
        }
        if let Some(codes) = self.selected_standards {
            next.set_selected_standards(&codes)?;
        }

        if let Some(topic) = self.topic {
            next.set_topic(topic);
        }
        if let Some(lens) = self.conceptual_lens {
            next.set_conceptual_lens(lens);
        }
        if let Some(macro_concept) = self.macro_concept {
            next.set_macro_concept(macro_concept);
        }
        if let Some(micro_concept) = self.micro_concept {
            next.set_micro_concept(micro_concept);
        }

        let lists = [
            (QuestionKind::Factual, self.factual_questions),
            (QuestionKind::Conceptual, self.conceptual_questions),
            (QuestionKind::Debatable, self.debatable_questions),
        ];
        for (kind, list) in lists {
            if let Some(list) = list {
                next.replace_questions(kind, list);
            }
        }

        if let Some(grasps) = self.grasps {
            next.set_grasps(grasps);
        }

        let concept_sources_changed = next.concept_sources() != before;
        *state = next;
        Ok(MergeOutcome {
            concept_sources_changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn catalog() -> &'static Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn absent_and_null_are_distinguished() {
        let absent: DesignUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.subject_id, None);

        let cleared: DesignUpdate = serde_json::from_str(r#"{"subject_id": null}"#).unwrap();
        assert_eq!(cleared.subject_id, Some(None));

        let set: DesignUpdate = serde_json::from_str(r#"{"school_level": "middle"}"#).unwrap();
        assert_eq!(set.school_level, Some(Some(SchoolLevel::Middle)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<DesignUpdate, _> =
            serde_json::from_str(r#"{"generalization": "hand written"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn one_update_can_select_level_subject_and_standards() {
        let mut state = DesignState::new();
        let update = DesignUpdate {
            school_level: Some(Some(SchoolLevel::Middle)),
            subject_id: Some(Some("md-eng-1".to_string())),
            selected_standards: Some(vec!["[9영01-01]".to_string()]),
            ..Default::default()
        };

        update.merge_into(&mut state, catalog()).unwrap();

        assert_eq!(state.subject().unwrap().id, "md-eng-1");
        assert_eq!(state.selected_standards().len(), 1);
    }

    #[test]
    fn failed_merge_leaves_state_untouched() {
        let mut state = DesignState::new();
        state.set_topic("AI".to_string());
        let snapshot = state.clone();

        let update = DesignUpdate {
            school_level: Some(Some(SchoolLevel::High)),
            subject_id: Some(Some("md-eng-1".to_string())),
            topic: Some("changed".to_string()),
            ..Default::default()
        };
        let err = update.merge_into(&mut state, catalog()).unwrap_err();

        assert_eq!(err.code, ErrorCode::SubjectNotFound);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn reports_concept_source_changes_only() {
        let mut state = DesignState::new();
        let topic_only = DesignUpdate {
            topic: Some("AI".to_string()),
            ..Default::default()
        };
        let outcome = topic_only.merge_into(&mut state, catalog()).unwrap();
        assert!(!outcome.concept_sources_changed);

        let lens = DesignUpdate {
            conceptual_lens: Some("관점".to_string()),
            ..Default::default()
        };
        let outcome = lens.clone().merge_into(&mut state, catalog()).unwrap();
        assert!(outcome.concept_sources_changed);

        let outcome = lens.merge_into(&mut state, catalog()).unwrap();
        assert!(!outcome.concept_sources_changed);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(DesignUpdate::default().is_empty());
        let update = DesignUpdate {
            topic: Some(String::new()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
