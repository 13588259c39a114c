//! # exam-core
//!
//! Shared domain types for the exam records manager: entity structs for
//! departments, teachers, students, courses, exams, and credentials, plus
//! the role and grade enums, the authenticated identity, and cross-cutting
//! error types.
//!
//! This crate is pure data — no database access, no I/O. The repositories
//! in `exam-db` map these structs to and from SQL rows.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
