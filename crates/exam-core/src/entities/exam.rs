use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Grade;

/// An exam sat by a student in a course. The grade defaults to
/// [`Grade::NoGrade`] until the exam is graded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exam {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub exam_date: NaiveDate,
    pub grade: Grade,
}

/// Insert input for [`Exam`]; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewExam {
    pub student_id: i64,
    pub course_id: i64,
    pub exam_date: NaiveDate,
    #[serde(default)]
    pub grade: Grade,
}

impl NewExam {
    /// Construct an ungraded exam.
    #[must_use]
    pub fn ungraded(student_id: i64, course_id: i64, exam_date: NaiveDate) -> Self {
        Self {
            student_id,
            course_id,
            exam_date,
            grade: Grade::default(),
        }
    }

    #[must_use]
    pub fn graded(student_id: i64, course_id: i64, exam_date: NaiveDate, grade: Grade) -> Self {
        Self {
            student_id,
            course_id,
            exam_date,
            grade,
        }
    }
}
