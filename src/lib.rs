//! Concept Design - Concept-Based Inquiry lesson design wizard
//!
//! This crate guides a teacher through a six-step lesson design (school
//! level and subject, achievement standards, conceptual lens, inquiry
//! questions, GRASPS performance task, review) and exports the finished
//! design as a paginated PDF, optionally delivered by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
