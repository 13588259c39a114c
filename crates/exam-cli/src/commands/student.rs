use exam_core::entities::{NewStudent, Student};
use exam_db::service::ExamService;

use crate::cli::StudentAction;

pub async fn handle(action: StudentAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        StudentAction::List => {
            for student in service.find_all::<Student>().await {
                println!(
                    "{:>4}  {} {}  {}  enrolled {}",
                    student.id,
                    student.first_name,
                    student.last_name,
                    student.email,
                    student.enrollment_year
                );
            }
        }
        StudentAction::Add {
            first_name,
            last_name,
            email,
            enrollment_year,
        } => {
            let new = NewStudent::new(first_name, last_name, email, enrollment_year);
            if let Some(id) = service.add::<Student>(&new).await {
                println!("Added student {id}.");
            }
        }
        StudentAction::Update {
            id,
            first_name,
            last_name,
            email,
            enrollment_year,
        } => {
            let Some(mut student) = service.find_by_id::<Student>(id).await else {
                anyhow::bail!("no student with id {id}");
            };
            student.first_name = first_name;
            student.last_name = last_name;
            student.email = email;
            student.enrollment_year = enrollment_year;
            service.update(&student).await;
        }
        StudentAction::Delete { ids } => {
            let targets = super::collect_targets::<Student>(service, &ids).await;
            service.delete_many(&targets).await;
        }
    }
    Ok(())
}
