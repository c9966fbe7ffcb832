//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the lesson design domain.

mod errors;
mod ids;
mod school_level;
mod timestamp;
mod wizard_step;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DesignId;
pub use school_level::SchoolLevel;
pub use timestamp::Timestamp;
pub use wizard_step::WizardStep;
