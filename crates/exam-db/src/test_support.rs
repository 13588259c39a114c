//! Shared test utilities for exam-db tests.

pub(crate) mod helpers {
    use exam_core::enums::Role;
    use exam_core::identity::AuthIdentity;

    use crate::ExamDb;
    use crate::service::ExamService;

    /// In-memory service with an admin identity (most repo tests).
    pub async fn admin_service() -> ExamService {
        let db = ExamDb::open(":memory:").await.unwrap();
        ExamService::from_db(db, AuthIdentity::new("admin@uni.edu", Role::Admin))
    }

    /// In-memory service with an arbitrary identity (gating tests).
    pub async fn service_with_role(email: &str, role: Role) -> ExamService {
        let db = ExamDb::open(":memory:").await.unwrap();
        ExamService::from_db(db, AuthIdentity::new(email, role))
    }

    /// Service whose store is unavailable (degraded-mode tests).
    pub fn unavailable_service() -> ExamService {
        ExamService::from_db(
            ExamDb::unavailable(),
            AuthIdentity::new("admin@uni.edu", Role::Admin),
        )
    }
}
