//! Text report writers.
//!
//! Two variants of the same per-exam block: one scoped to a single course,
//! one scoped to a single student's own exam history. Both write labeled
//! lines separated by a dashed divider per exam record.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use exam_core::entities::{Course, Exam};
use exam_db::service::ExamService;

use crate::ExportError;

const DIVIDER: &str = "----------------";

fn push_exam_block(out: &mut String, exam: &Exam) {
    let _ = writeln!(out, "{DIVIDER}");
    let _ = writeln!(out, "Exam ID: {}", exam.id);
    let _ = writeln!(out, "Student ID: {}", exam.student_id);
    let _ = writeln!(out, "Date: {}", exam.exam_date);
    let _ = writeln!(out, "Grade: {}", exam.grade);
}

/// Write `<title>_report.txt` listing every exam sat in one course.
///
/// # Errors
///
/// Returns [`ExportError::MissingCourse`] when the course does not exist
/// and [`ExportError::Io`] when the file cannot be written.
pub async fn course_report(
    service: &ExamService,
    course_id: i64,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let course = service
        .find_by_id::<Course>(course_id)
        .await
        .ok_or(ExportError::MissingCourse(course_id))?;
    let exams = service.exams_by_course(course.id).await;

    let mut out = String::new();
    let _ = writeln!(out, "Course report");
    let _ = writeln!(out, "Course ID: {}", course.id);
    let _ = writeln!(out, "Course Title: {}", course.title);
    for exam in &exams {
        push_exam_block(&mut out, exam);
    }

    let path = dir.join(format!("{}_report.txt", course.title));
    fs::write(&path, out)?;
    Ok(path)
}

/// Write `report_card.txt` listing the exam history of the student whose
/// email the caller supplies — the authenticated student's own address.
///
/// # Errors
///
/// Returns [`ExportError::MissingStudent`] when no student row matches the
/// email and [`ExportError::Io`] when the file cannot be written.
pub async fn student_report(
    service: &ExamService,
    email: &str,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let student = service
        .student_by_email(email)
        .await
        .ok_or(ExportError::MissingStudent)?;
    let exams = service.exams_by_student_email(email).await;

    let mut out = String::new();
    let _ = writeln!(out, "Report Card");
    let _ = writeln!(out, "Student ID: {}", student.id);
    let _ = writeln!(out, "Name: {} {}", student.first_name, student.last_name);
    for exam in &exams {
        push_exam_block(&mut out, exam);
    }

    let path = dir.join("report_card.txt");
    fs::write(&path, out)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use exam_core::entities::{NewCourse, NewExam, NewStudent};
    use exam_core::enums::{Grade, Role};
    use exam_core::identity::AuthIdentity;
    use exam_db::ExamDb;
    use pretty_assertions::assert_eq;

    async fn admin_service() -> ExamService {
        let db = ExamDb::open(":memory:").await.unwrap();
        ExamService::from_db(db, AuthIdentity::new("admin@uni.edu", Role::Admin))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn course_report_lists_each_exam_block() {
        let svc = admin_service().await;
        let course_id = svc
            .add::<Course>(&NewCourse::new("PHY101", "Mechanics", 10, 1))
            .await
            .unwrap();
        svc.add::<Exam>(&NewExam::graded(1, course_id, date(2026, 5, 20), Grade::B))
            .await;
        svc.add::<Exam>(&NewExam::ungraded(2, course_id, date(2026, 5, 21)))
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = course_report(&svc, course_id, dir.path()).await.unwrap();

        assert_eq!(path.file_name().unwrap(), "Mechanics_report.txt");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Course report\n"));
        assert!(content.contains("Course Title: Mechanics"));
        assert_eq!(content.matches(DIVIDER).count(), 2);
        assert!(content.contains("Grade: B"));
        assert!(content.contains("Grade: No grade"));
    }

    #[tokio::test]
    async fn course_report_requires_an_existing_course() {
        let svc = admin_service().await;
        let dir = tempfile::tempdir().unwrap();
        let err = course_report(&svc, 42, dir.path()).await.unwrap_err();
        assert!(matches!(err, ExportError::MissingCourse(42)));
    }

    #[tokio::test]
    async fn student_report_is_scoped_to_one_email() {
        let svc = admin_service().await;
        let grace = svc
            .add::<exam_core::entities::Student>(&NewStudent::new(
                "Grace",
                "Hopper",
                "grace@uni.edu",
                2024,
            ))
            .await
            .unwrap();
        let other = svc
            .add::<exam_core::entities::Student>(&NewStudent::new(
                "Alan",
                "Turing",
                "alan@uni.edu",
                2024,
            ))
            .await
            .unwrap();
        svc.add::<Exam>(&NewExam::graded(grace, 1, date(2026, 5, 20), Grade::A))
            .await;
        svc.add::<Exam>(&NewExam::graded(other, 1, date(2026, 5, 20), Grade::C))
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = student_report(&svc, "grace@uni.edu", dir.path())
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Name: Grace Hopper"));
        assert!(content.contains("Grade: A"));
        assert!(!content.contains("Grade: C"));
        assert_eq!(content.matches(DIVIDER).count(), 1);
    }

    #[tokio::test]
    async fn student_report_requires_a_student_row() {
        let svc = admin_service().await;
        let dir = tempfile::tempdir().unwrap();
        let err = student_report(&svc, "ghost@uni.edu", dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingStudent));
    }
}
