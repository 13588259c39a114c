//! Course repository — column mapping.

use exam_core::entities::{Course, NewCourse};
use exam_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::record::Record;

impl Record for Course {
    type New = NewCourse;

    const TABLE: &'static str = "course";
    const COLUMNS: &'static [&'static str] = &["course_code", "title", "credits", "teacher_id"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            course_code: row.get::<String>(1)?,
            title: row.get::<String>(2)?,
            credits: row.get::<i64>(3)?,
            teacher_id: row.get::<i64>(4)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn insert_values(new: &Self::New) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(new.course_code.clone()),
            libsql::Value::Text(new.title.clone()),
            libsql::Value::Integer(new.credits),
            libsql::Value::Integer(new.teacher_id),
        ]
    }

    fn update_values(&self) -> Vec<libsql::Value> {
        vec![
            libsql::Value::Text(self.course_code.clone()),
            libsql::Value::Text(self.title.clone()),
            libsql::Value::Integer(self.credits),
            libsql::Value::Integer(self.teacher_id),
        ]
    }

    fn validate_new(new: &Self::New) -> Result<(), CoreError> {
        new.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::admin_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_then_find_by_id_round_trips() {
        let svc = admin_service().await;
        let id = svc
            .add::<Course>(&NewCourse::new("PHY101", "Mechanics", 10, 1))
            .await
            .unwrap();

        let found = svc.find_by_id::<Course>(id).await.unwrap();
        assert_eq!(found.course_code, "PHY101");
        assert_eq!(found.title, "Mechanics");
        assert_eq!(found.credits, 10);
        assert_eq!(found.teacher_id, 1);
    }

    #[tokio::test]
    async fn deleted_course_is_not_found() {
        let svc = admin_service().await;
        let id = svc
            .add::<Course>(&NewCourse::new("PHY101", "Mechanics", 10, 1))
            .await
            .unwrap();

        let course = svc.find_by_id::<Course>(id).await.unwrap();
        svc.delete_many(&[course]).await;
        assert!(svc.find_by_id::<Course>(id).await.is_none());
    }
}
