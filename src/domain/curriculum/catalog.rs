//! Read-only curriculum catalog: school level → subjects → standards.
//!
//! The 2022 revised English curriculum is compiled into the binary from
//! `data/curriculum.json` and parsed once on first use.

use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::Subject;
use crate::domain::foundation::{DomainError, ErrorCode, SchoolLevel};

const EMBEDDED_CATALOG: &str = include_str!("../../../data/curriculum.json");

static EMBEDDED: OnceCell<Catalog> = OnceCell::new();

/// Nested, immutable lookup table of subjects per school level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    levels: BTreeMap<SchoolLevel, Vec<Subject>>,
}

impl Catalog {
    /// Returns the compiled-in catalog.
    pub fn embedded() -> Result<&'static Catalog, DomainError> {
        EMBEDDED.get_or_try_init(|| Catalog::from_json(EMBEDDED_CATALOG))
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Catalog, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Curriculum catalog is malformed: {}", e),
            )
        })
    }

    /// Builds a catalog from already-constructed subjects.
    pub fn from_subjects(levels: BTreeMap<SchoolLevel, Vec<Subject>>) -> Catalog {
        Catalog { levels }
    }

    /// Subjects offered at a school level (empty if the level has none).
    pub fn subjects(&self, level: SchoolLevel) -> &[Subject] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds a subject by id within a school level.
    pub fn subject(&self, level: SchoolLevel, subject_id: &str) -> Option<&Subject> {
        self.subjects(level).iter().find(|s| s.id == subject_id)
    }

    /// Total number of subjects across all levels.
    pub fn subject_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}
