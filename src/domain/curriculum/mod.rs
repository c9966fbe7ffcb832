//! Curriculum catalog - the static 2022 revised curriculum lookup table.

mod catalog;
mod standard;

pub use catalog::Catalog;
pub use standard::{
    AchievementStandard, StandardGroup, Subject, SubjectCategory, CUSTOM_STANDARD_CODE,
    UNGROUPED_LABEL,
};
