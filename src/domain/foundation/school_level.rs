//! School level (중학교 / 고등학교).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolLevel {
    Middle,
    High,
}

impl SchoolLevel {
    pub fn all() -> &'static [SchoolLevel] {
        &[SchoolLevel::Middle, SchoolLevel::High]
    }

    /// Wire/catalog key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolLevel::Middle => "middle",
            SchoolLevel::High => "high",
        }
    }

    /// Korean label used in the exported document header.
    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolLevel::Middle => "중학교",
            SchoolLevel::High => "고등학교",
        }
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchoolLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "middle" => Ok(SchoolLevel::Middle),
            "high" => Ok(SchoolLevel::High),
            other => Err(ValidationError::invalid_format(
                "school_level",
                format!("unknown school level '{}'", other),
            )),
        }
    }
}
