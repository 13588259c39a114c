//! Department repository — column mapping, name finder, delete guard.

use exam_core::entities::{Department, NewDepartment};
use exam_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::record::{DeleteGuard, Record};
use crate::service::ExamService;

impl Record for Department {
    type New = NewDepartment;

    const TABLE: &'static str = "department";
    const COLUMNS: &'static [&'static str] = &["name"];
    const ORDER_BY: Option<&'static str> = Some("id");

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn insert_values(new: &Self::New) -> Vec<libsql::Value> {
        vec![libsql::Value::Text(new.name.clone())]
    }

    fn update_values(&self) -> Vec<libsql::Value> {
        vec![libsql::Value::Text(self.name.clone())]
    }

    fn validate_new(new: &Self::New) -> Result<(), CoreError> {
        new.validate()
    }

    /// A department with employed teachers must not be deleted. Teachers
    /// link by name, so the dependent check queries by name as well.
    fn delete_guard(&self) -> Option<DeleteGuard> {
        Some(DeleteGuard {
            dependents_sql: "SELECT COUNT(*) FROM teacher WHERE department = ?1",
            param: libsql::Value::Text(self.name.clone()),
            conflict_message: format!(
                "Cannot delete non-empty departments. {} currently has employed teachers.",
                self.name
            ),
        })
    }
}

impl ExamService {
    /// Look up a department by its (unique in practice) name.
    pub async fn department_by_name(&self, name: &str) -> Option<Department> {
        let conn = self.conn_or_report("Failed to get department")?;
        let result: Result<Option<Department>, DatabaseError> = async {
            let mut rows = conn
                .query("SELECT id, name FROM department WHERE name = ?1", [name])
                .await?;
            match rows.next().await? {
                Some(row) => Ok(Some(Department::from_row(&row)?)),
                None => Ok(None),
            }
        }
        .await;
        match result {
            Ok(found) => found,
            Err(e) => {
                self.report_statement("Error while getting department", &e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportKind;
    use crate::test_support::helpers::admin_service;
    use exam_core::entities::NewTeacher;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_then_find_by_id_round_trips() {
        let svc = admin_service().await;
        let id = svc
            .add::<Department>(&NewDepartment::new("Physics"))
            .await
            .unwrap();

        let found = svc.find_by_id::<Department>(id).await.unwrap();
        assert_eq!(found.name, "Physics");
        assert!(svc.errors().is_empty());
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let svc = admin_service().await;
        for name in ["Physics", "History", "Biology"] {
            svc.add::<Department>(&NewDepartment::new(name)).await;
        }

        let all = svc.find_all::<Department>().await;
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Physics", "History", "Biology"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let svc = admin_service().await;
        let id = svc
            .add::<Department>(&NewDepartment::new("Phsyics"))
            .await
            .unwrap();

        let mut dept = svc.find_by_id::<Department>(id).await.unwrap();
        dept.name = "Physics".to_string();
        svc.update(&dept).await;

        let reread = svc.find_by_id::<Department>(id).await.unwrap();
        assert_eq!(reread.name, "Physics");
        assert!(svc.errors().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row_without_dependents() {
        let svc = admin_service().await;
        let id = svc
            .add::<Department>(&NewDepartment::new("Physics"))
            .await
            .unwrap();

        let dept = svc.find_by_id::<Department>(id).await.unwrap();
        svc.delete_many(&[dept]).await;

        assert!(svc.find_by_id::<Department>(id).await.is_none());
        assert!(svc.errors().is_empty());
    }

    #[tokio::test]
    async fn delete_is_vetoed_while_teachers_reference_the_name() {
        let svc = admin_service().await;
        let dept_id = svc
            .add::<Department>(&NewDepartment::new("Physics"))
            .await
            .unwrap();
        let teacher_id = svc
            .add::<exam_core::entities::Teacher>(&NewTeacher::new(
                "A",
                "B",
                "Physics",
                "a@b.com",
            ))
            .await
            .unwrap();

        // Vetoed: the department still has an employed teacher.
        let dept = svc.find_by_id::<Department>(dept_id).await.unwrap();
        svc.delete_many(std::slice::from_ref(&dept)).await;

        let reports = svc.drain_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::ReferentialConflict);
        assert!(reports[0].message.contains("Physics"));
        assert!(svc.find_by_id::<Department>(dept_id).await.is_some());

        // Remove the teacher first, then the delete succeeds.
        let teacher = svc
            .find_by_id::<exam_core::entities::Teacher>(teacher_id)
            .await
            .unwrap();
        svc.delete_many(&[teacher]).await;
        svc.delete_many(&[dept]).await;

        assert!(svc.find_by_id::<Department>(dept_id).await.is_none());
        assert!(svc.errors().is_empty());
    }

    #[tokio::test]
    async fn veto_applies_per_row_within_a_batch() {
        let svc = admin_service().await;
        let blocked_id = svc
            .add::<Department>(&NewDepartment::new("Physics"))
            .await
            .unwrap();
        let free_id = svc
            .add::<Department>(&NewDepartment::new("History"))
            .await
            .unwrap();
        svc.add::<exam_core::entities::Teacher>(&NewTeacher::new(
            "A",
            "B",
            "Physics",
            "a@b.com",
        ))
        .await;

        let blocked = svc.find_by_id::<Department>(blocked_id).await.unwrap();
        let free = svc.find_by_id::<Department>(free_id).await.unwrap();
        svc.delete_many(&[blocked, free]).await;

        // The guarded row stays, the unguarded one in the same batch goes.
        assert!(svc.find_by_id::<Department>(blocked_id).await.is_some());
        assert!(svc.find_by_id::<Department>(free_id).await.is_none());
        assert_eq!(svc.drain_reports().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_the_store() {
        let svc = admin_service().await;
        let id = svc.add::<Department>(&NewDepartment::new("  ")).await;
        assert!(id.is_none());

        let reports = svc.drain_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::StatementRejected);
    }

    #[tokio::test]
    async fn find_by_name() {
        let svc = admin_service().await;
        svc.add::<Department>(&NewDepartment::new("Physics")).await;

        let found = svc.department_by_name("Physics").await.unwrap();
        assert_eq!(found.name, "Physics");
        assert!(svc.department_by_name("Alchemy").await.is_none());
        assert!(svc.errors().is_empty());
    }
}
