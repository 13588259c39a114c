//! Per-entity column mappings and entity-specific finders.
//!
//! Each module implements [`crate::record::Record`] for one entity and adds
//! any finders beyond the generic contract as `impl ExamService` blocks.

pub mod course;
pub mod department;
pub mod exam;
pub mod student;
pub mod teacher;
pub mod users;
