//! Teacher repository — column mapping.
//!
//! The `department` column stores the department's name; renaming a
//! department silently breaks this link, which is why the department
//! repository's delete guard re-queries by name.

use exam_core::entities::{NewTeacher, Teacher};
use exam_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::record::Record;

impl Record for Teacher {
    type New = NewTeacher;

    const TABLE: &'static str = "teacher";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "department", "email"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            first_name: row.get::<String>(1)?,
            last_name: row.get::<String>(2)?,
            department: row.get::<String>(3)?,
            email: row.get::<String>(4)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn insert_values(new: &Self::New) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(new.first_name.clone()),
            libsql::Value::Text(new.last_name.clone()),
            libsql::Value::Text(new.department.clone()),
            libsql::Value::Text(new.email.clone()),
        ]
    }

    fn update_values(&self) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(self.first_name.clone()),
            libsql::Value::Text(self.last_name.clone()),
            libsql::Value::Text(self.department.clone()),
            libsql::Value::Text(self.email.clone()),
        ]
    }

    fn validate_new(new: &Self::New) -> Result<(), CoreError> {
        new.validate()
    }
}
