//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, steps, school levels, errors)
//! - `curriculum` - Read-only catalog of subjects and achievement standards
//! - `design` - The DesignState aggregate, updates, validators, derived fields
//! - `wizard` - Step navigation over one design session
//! - `document` - Pure projection of a design into a review document
//! - `export` - Page geometry, pagination and file naming

pub mod curriculum;
pub mod design;
pub mod document;
pub mod export;
pub mod foundation;
pub mod wizard;
