//! # exam-export
//!
//! Bulk export and report generation.
//!
//! [`export_all`] serializes every repository's full result set to one CSV
//! file per entity. [`reports`] holds the two narrower text reports: the
//! per-course report and a student's own report card. All writers take the
//! output directory from the caller; the whole export is wrapped in one
//! failure path, so a mid-run error leaves earlier files on disk.

mod csv;
mod error;
pub mod reports;

pub use error::ExportError;
pub use reports::{course_report, student_report};

use std::path::Path;

use exam_core::entities::{Course, Department, Exam, Student, Teacher};
use exam_db::helpers::DATE_FORMAT;
use exam_db::service::ExamService;

/// Export all five entity tables to `<dir>/<plural>.csv`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on the first write failure; files already
/// written are not cleaned up.
pub async fn export_all(service: &ExamService, dir: &Path) -> Result<(), ExportError> {
    let departments = service.find_all::<Department>().await;
    csv::write_csv(
        &dir.join("departments.csv"),
        "id, name",
        &departments
            .iter()
            .map(|d| vec![d.id.to_string(), d.name.clone()])
            .collect::<Vec<_>>(),
    )?;

    let teachers = service.find_all::<Teacher>().await;
    csv::write_csv(
        &dir.join("teachers.csv"),
        "id, first_name, last_name, department, email",
        &teachers
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.first_name.clone(),
                    t.last_name.clone(),
                    t.department.clone(),
                    t.email.clone(),
                ]
            })
            .collect::<Vec<_>>(),
    )?;

    let students = service.find_all::<Student>().await;
    csv::write_csv(
        &dir.join("students.csv"),
        "id, first_name, last_name, email, enrollment_year",
        &students
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.first_name.clone(),
                    s.last_name.clone(),
                    s.email.clone(),
                    s.enrollment_year.to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    )?;

    let courses = service.find_all::<Course>().await;
    csv::write_csv(
        &dir.join("courses.csv"),
        "id, course_code, title, credits, teacher_id",
        &courses
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.course_code.clone(),
                    c.title.clone(),
                    c.credits.to_string(),
                    c.teacher_id.to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    )?;

    let exams = service.find_all::<Exam>().await;
    csv::write_csv(
        &dir.join("exams.csv"),
        "id, student_id, course_id, exam_date, grade",
        &exams
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.student_id.to_string(),
                    e.course_id.to_string(),
                    e.exam_date.format(DATE_FORMAT).to_string(),
                    e.grade.as_str().to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    )?;

    tracing::info!(dir = %dir.display(), "finished exporting the database");
    Ok(())
}
