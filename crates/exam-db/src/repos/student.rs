//! Student repository — column mapping and email finder.

use exam_core::entities::{NewStudent, Student};
use exam_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::record::Record;
use crate::service::ExamService;

impl Record for Student {
    type New = NewStudent;

    const TABLE: &'static str = "student";
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "email", "enrollment_year"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            first_name: row.get::<String>(1)?,
            last_name: row.get::<String>(2)?,
            email: row.get::<String>(3)?,
            enrollment_year: row.get::<i64>(4)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn insert_values(new: &Self::New) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(new.first_name.clone()),
            libsql::Value::Text(new.last_name.clone()),
            libsql::Value::Text(new.email.clone()),
            libsql::Value::Integer(new.enrollment_year),
        ]
    }

    fn update_values(&self) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(self.first_name.clone()),
            libsql::Value::Text(self.last_name.clone()),
            libsql::Value::Text(self.email.clone()),
            libsql::Value::Integer(self.enrollment_year),
        ]
    }

    fn validate_new(new: &Self::New) -> Result<(), CoreError> {
        new.validate()
    }
}

impl ExamService {
    /// Look up a student by email — the key the login identity carries,
    /// used to scope a student's report card to their own records.
    pub async fn student_by_email(&self, email: &str) -> Option<Student> {
        let conn = self.conn_or_report("Failed to get student")?;
        let result: Result<Option<Student>, DatabaseError> = async {
            let mut rows = conn
                .query(
                    "SELECT id, first_name, last_name, email, enrollment_year
                     FROM student WHERE email = ?1",
                    [email],
                )
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(Student::from_row(&row)?)),
                None => Ok(None),
            }
        }
        .await;
        match result {
            Ok(found) => found,
            Err(e) => {
                self.report_statement("Error while getting student", &e);
                None
            }
        }
    }
}
