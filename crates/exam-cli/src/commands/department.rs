use exam_core::entities::{Department, NewDepartment};
use exam_db::service::ExamService;

use crate::cli::DepartmentAction;

pub async fn handle(action: DepartmentAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        DepartmentAction::List => {
            for department in service.find_all::<Department>().await {
                println!("{:>4}  {}", department.id, department.name);
            }
        }
        DepartmentAction::Add { name } => {
            if let Some(id) = service.add::<Department>(&NewDepartment::new(name)).await {
                println!("Added department {id}.");
            }
        }
        DepartmentAction::Update { id, name } => {
            let Some(mut department) = service.find_by_id::<Department>(id).await else {
                anyhow::bail!("no department with id {id}");
            };
            department.name = name;
            service.update(&department).await;
        }
        DepartmentAction::Delete { ids } => {
            let targets = super::collect_targets::<Department>(service, &ids).await;
            service.delete_many(&targets).await;
        }
    }
    Ok(())
}
