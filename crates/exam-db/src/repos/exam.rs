//! Exam repository — column mapping plus the course and student finders
//! that feed the report writers.

use exam_core::entities::{Exam, NewExam};

use crate::error::DatabaseError;
use crate::helpers::{DATE_FORMAT, parse_date, parse_grade};
use crate::record::Record;
use crate::service::ExamService;

impl Record for Exam {
    type New = NewExam;

    const TABLE: &'static str = "exam";
    const COLUMNS: &'static [&'static str] = &["student_id", "course_id", "exam_date", "grade"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            student_id: row.get::<i64>(1)?,
            course_id: row.get::<i64>(2)?,
            exam_date: parse_date(&row.get::<String>(3)?)?,
            grade: parse_grade(&row.get::<String>(4)?)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn insert_values(new: &Self::New) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Integer(new.student_id),
            libsql::Value::Integer(new.course_id),
            libsql::Value::Text(new.exam_date.format(DATE_FORMAT).to_string()),
            libsql::Value::Text(new.grade.as_str().to_string()),
        ]
    }

    fn update_values(&self) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Integer(self.student_id),
            libsql::Value::Integer(self.course_id),
            libsql::Value::Text(self.exam_date.format(DATE_FORMAT).to_string()),
            libsql::Value::Text(self.grade.as_str().to_string()),
        ]
    }
}

impl ExamService {
    /// All exams sat in one course (the course report's data set).
    pub async fn exams_by_course(&self, course_id: i64) -> Vec<Exam> {
        let Some(conn) = self.conn_or_report("Failed to get exams") else {
            return Vec::new();
        };
        let result: Result<Vec<Exam>, DatabaseError> = async {
            let mut rows = conn
                .query(
                    "SELECT id, student_id, course_id, exam_date, grade
                     FROM exam WHERE course_id = ?1",
                    libsql::params![course_id],
                )
                .await?;
            let mut exams = Vec::new();
            while let Some(row) = rows.next().await? {
                exams.push(Exam::from_row(&row)?);
            }
            Ok(exams)
        }
        .await;
        match result {
            Ok(exams) => exams,
            Err(e) => {
                self.report_statement("Error while getting exams", &e);
                Vec::new()
            }
        }
    }

    /// All exams belonging to the student with the given email (the report
    /// card's data set — scoped to the login identity's own address).
    pub async fn exams_by_student_email(&self, email: &str) -> Vec<Exam> {
        let Some(conn) = self.conn_or_report("Failed to get exams") else {
            return Vec::new();
        };
        let result: Result<Vec<Exam>, DatabaseError> = async {
            let mut rows = conn
                .query(
                    "SELECT e.id, e.student_id, e.course_id, e.exam_date, e.grade
                     FROM exam AS e
                     INNER JOIN student AS s ON e.student_id = s.id
                     WHERE s.email = ?1",
                    [email],
                )
                .await?;
            let mut exams = Vec::new();
            while let Some(row) = rows.next().await? {
                exams.push(Exam::from_row(&row)?);
            }
            Ok(exams)
        }
        .await;
        match result {
            Ok(exams) => exams,
            Err(e) => {
                self.report_statement("Error while getting exams", &e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::admin_service;
    use chrono::NaiveDate;
    use exam_core::entities::NewStudent;
    use exam_core::enums::Grade;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn ungraded_exam_reads_back_as_no_grade() {
        let svc = admin_service().await;
        let id = svc
            .add::<Exam>(&NewExam::ungraded(1, 1, date(2026, 5, 20)))
            .await
            .unwrap();

        let found = svc.find_by_id::<Exam>(id).await.unwrap();
        assert_eq!(found.grade, Grade::NoGrade);
        assert_eq!(found.grade.as_str(), "No grade");
    }

    #[tokio::test]
    async fn graded_exam_reads_back_its_grade() {
        let svc = admin_service().await;
        let id = svc
            .add::<Exam>(&NewExam::graded(1, 1, date(2026, 5, 20), Grade::A))
            .await
            .unwrap();

        let found = svc.find_by_id::<Exam>(id).await.unwrap();
        assert_eq!(found.grade.as_str(), "A");
        assert_eq!(found.exam_date, date(2026, 5, 20));
    }

    #[tokio::test]
    async fn exams_by_course_filters_on_course_id() {
        let svc = admin_service().await;
        svc.add::<Exam>(&NewExam::graded(1, 7, date(2026, 5, 20), Grade::B))
            .await;
        svc.add::<Exam>(&NewExam::graded(2, 7, date(2026, 5, 21), Grade::C))
            .await;
        svc.add::<Exam>(&NewExam::ungraded(1, 9, date(2026, 6, 1)))
            .await;

        let exams = svc.exams_by_course(7).await;
        assert_eq!(exams.len(), 2);
        assert!(exams.iter().all(|e| e.course_id == 7));
    }

    #[tokio::test]
    async fn exams_by_student_email_joins_through_student() {
        let svc = admin_service().await;
        let student_id = svc
            .add::<exam_core::entities::Student>(&NewStudent::new(
                "Grace",
                "Hopper",
                "grace@uni.edu",
                2024,
            ))
            .await
            .unwrap();
        svc.add::<Exam>(&NewExam::graded(student_id, 1, date(2026, 5, 20), Grade::A))
            .await;
        svc.add::<Exam>(&NewExam::graded(999, 1, date(2026, 5, 20), Grade::F))
            .await;

        let exams = svc.exams_by_student_email("grace@uni.edu").await;
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].student_id, student_id);
    }
}
