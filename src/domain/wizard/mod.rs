//! Wizard navigation over a single design session.

mod controller;

pub use controller::{StepOverview, StepStatus, WizardController};
