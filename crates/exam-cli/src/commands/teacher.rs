use exam_core::entities::{NewTeacher, Teacher};
use exam_db::service::ExamService;

use crate::cli::TeacherAction;

pub async fn handle(action: TeacherAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        TeacherAction::List => {
            for teacher in service.find_all::<Teacher>().await {
                println!(
                    "{:>4}  {} {}  [{}]  {}",
                    teacher.id, teacher.first_name, teacher.last_name, teacher.department, teacher.email
                );
            }
        }
        TeacherAction::Add {
            first_name,
            last_name,
            department,
            email,
        } => {
            let new = NewTeacher::new(first_name, last_name, department, email);
            if let Some(id) = service.add::<Teacher>(&new).await {
                println!("Added teacher {id}.");
            }
        }
        TeacherAction::Update {
            id,
            first_name,
            last_name,
            department,
            email,
        } => {
            let Some(mut teacher) = service.find_by_id::<Teacher>(id).await else {
                anyhow::bail!("no teacher with id {id}");
            };
            teacher.first_name = first_name;
            teacher.last_name = last_name;
            teacher.department = department;
            teacher.email = email;
            service.update(&teacher).await;
        }
        TeacherAction::Delete { ids } => {
            let targets = super::collect_targets::<Teacher>(service, &ids).await;
            service.delete_many(&targets).await;
        }
    }
    Ok(())
}
