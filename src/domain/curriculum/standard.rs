//! Achievement standards and subjects of the curriculum catalog.

use serde::{Deserialize, Serialize};

/// Code of the synthesized standard offered when a subject has no catalog entries.
pub const CUSTOM_STANDARD_CODE: &str = "CUSTOM";

/// Group label used for standards that carry no group of their own.
pub const UNGROUPED_LABEL: &str = "전체 (General)";

/// One official curriculum learning-outcome statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStandard {
    /// Unique within a subject, e.g. `[9영01-01]`.
    pub code: String,
    pub description: String,
    /// Display grouping, e.g. `이해 (Reception)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl AchievementStandard {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// The user-defined escape hatch standard.
    pub fn custom() -> Self {
        Self::new(CUSTOM_STANDARD_CODE, "사용자 정의 성취기준")
    }

    pub fn is_custom(&self) -> bool {
        self.code == CUSTOM_STANDARD_CODE
    }
}

/// Subject category within the high school curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    Common,
    General,
    Career,
    Fusion,
}

/// A subject and its achievement standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique within a school level.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SubjectCategory>,
    #[serde(default)]
    pub standards: Vec<AchievementStandard>,
}

/// Standards sharing one group label, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardGroup<'a> {
    pub name: &'a str,
    pub standards: Vec<&'a AchievementStandard>,
}

impl Subject {
    /// Finds a standard of this subject by code.
    pub fn standard(&self, code: &str) -> Option<&AchievementStandard> {
        self.standards.iter().find(|s| s.code == code)
    }

    /// True when the catalog has no entries and only the custom standard may be chosen.
    pub fn requires_custom_standard(&self) -> bool {
        self.standards.is_empty()
    }

    /// Groups standards by their label, keeping first-seen group order.
    pub fn grouped_standards(&self) -> Vec<StandardGroup<'_>> {
        let mut groups: Vec<StandardGroup<'_>> = Vec::new();
        for standard in &self.standards {
            let name = standard.group.as_deref().unwrap_or(UNGROUPED_LABEL);
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.standards.push(standard),
                None => groups.push(StandardGroup {
                    name,
                    standards: vec![standard],
                }),
            }
        }
        groups
    }
}
