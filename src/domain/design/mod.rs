//! Unit design aggregate and the pure rules around it.
//!
//! - `state` - the DesignState aggregate and its cascading invariants
//! - `update` - partial updates merged atomically into the state
//! - `generalization` - the derived generalization statement
//! - `validation` - per-step advancement gates
//! - `progress` - sidebar summary
//! - `questions`, `grasps`, `suggestions` - step content and guidance

mod generalization;
mod grasps;
mod progress;
mod questions;
mod state;
mod suggestions;
mod update;
mod validation;

pub use generalization::recompute;
pub use grasps::{Grasps, GraspsField};
pub use progress::{DesignProgress, QuestionCounts};
pub use questions::{InquiryQuestions, QuestionKind};
pub use state::DesignState;
pub use suggestions::{COMMON_LENSES, MACRO_CONCEPT_EXAMPLES};
pub use update::{DesignUpdate, MergeOutcome};
pub use validation::{is_step_valid, is_valid_for};
