//! WizardController - sole owner of one session's step and DesignState.
//!
//! Every mutation goes through here so that a merge touching the concept
//! sources is always followed by a generalization refresh before the
//! state is observable again.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::curriculum::Catalog;
use crate::domain::design::{
    is_step_valid, is_valid_for, DesignProgress, DesignState, DesignUpdate, GraspsField,
    QuestionKind,
};
use crate::domain::foundation::{DomainError, SchoolLevel, WizardStep};

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Stepper entry for one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOverview {
    pub step: WizardStep,
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
    pub valid: bool,
}

/// Drives the five-step wizard over a single DesignState.
#[derive(Debug, Clone)]
pub struct WizardController {
    catalog: Arc<Catalog>,
    current: WizardStep,
    state: DesignState,
}

impl WizardController {
    /// Starts a session at step 1 with an empty state.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current: WizardStep::first(),
            state: DesignState::new(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn state(&self) -> &DesignState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ════════════════════════════════════════════════════════════════
    // Navigation
    // ════════════════════════════════════════════════════════════════

    pub fn can_advance(&self) -> bool {
        !self.current.is_last() && is_valid_for(self.current, &self.state)
    }

    pub fn can_retreat(&self) -> bool {
        self.current.previous().is_some()
    }

    /// Moves forward if the current step validates; returns whether it moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.current.next() {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Moves back one step without touching any data.
    pub fn retreat(&mut self) -> bool {
        match self.current.previous() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Validity of an arbitrary step number against the current state.
    pub fn is_step_valid(&self, step: u8) -> bool {
        is_step_valid(step, &self.state)
    }

    /// Stepper view of all five steps.
    pub fn steps(&self) -> Vec<StepOverview> {
        let current = self.current.number();
        WizardStep::all()
            .iter()
            .map(|step| {
                let status = match step.number() {
                    n if n < current => StepStatus::Completed,
                    n if n == current => StepStatus::Current,
                    _ => StepStatus::Upcoming,
                };
                StepOverview {
                    step: *step,
                    number: step.number(),
                    title: step.title(),
                    description: step.description(),
                    status,
                    valid: is_valid_for(*step, &self.state),
                }
            })
            .collect()
    }

    /// Fraction of the stepper filled, 0.0 on step 1 and 1.0 on step 5.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.current.number() - 1) / f64::from(WizardStep::COUNT - 1)
    }

    pub fn progress(&self) -> DesignProgress {
        DesignProgress::from_state(&self.state)
    }

    // ════════════════════════════════════════════════════════════════
    // State mutation
    // ════════════════════════════════════════════════════════════════

    /// Merges a partial update, then settles the generalization.
    ///
    /// All-or-nothing: an invalid reference leaves the state unchanged.
    pub fn apply_update(&mut self, update: DesignUpdate) -> Result<(), DomainError> {
        let outcome = update.merge_into(&mut self.state, &self.catalog)?;
        if outcome.concept_sources_changed {
            self.state.refresh_generalization();
        }
        Ok(())
    }

    pub fn select_school_level(&mut self, level: Option<SchoolLevel>) {
        self.state.select_school_level(level);
    }

    pub fn select_subject(&mut self, subject_id: &str) -> Result<(), DomainError> {
        self.state.select_subject(&self.catalog, subject_id)
    }

    /// Returns whether the standard is selected afterwards.
    pub fn toggle_standard(&mut self, code: &str) -> Result<bool, DomainError> {
        self.state.toggle_standard(code)
    }

    /// Returns whether the list changed.
    pub fn add_question(&mut self, kind: QuestionKind, text: impl Into<String>) -> bool {
        self.state.add_question(kind, text.into())
    }

    pub fn remove_question(&mut self, kind: QuestionKind, index: usize) -> Option<String> {
        self.state.remove_question(kind, index)
    }

    pub fn set_grasps_field(&mut self, field: GraspsField, value: impl Into<String>) {
        self.state.set_grasps_field(field, value.into());
    }
}
