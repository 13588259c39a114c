use exam_core::entities::{Course, NewCourse};
use exam_db::service::ExamService;

use crate::cli::CourseAction;

pub async fn handle(action: CourseAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        CourseAction::List => {
            for course in service.find_all::<Course>().await {
                println!(
                    "{:>4}  {}  {}  ({} credits, teacher {})",
                    course.id, course.course_code, course.title, course.credits, course.teacher_id
                );
            }
        }
        CourseAction::Add {
            course_code,
            title,
            credits,
            teacher_id,
        } => {
            let new = NewCourse::new(course_code, title, credits, teacher_id);
            if let Some(id) = service.add::<Course>(&new).await {
                println!("Added course {id}.");
            }
        }
        CourseAction::Update {
            id,
            course_code,
            title,
            credits,
            teacher_id,
        } => {
            let Some(mut course) = service.find_by_id::<Course>(id).await else {
                anyhow::bail!("no course with id {id}");
            };
            course.course_code = course_code;
            course.title = title;
            course.credits = credits;
            course.teacher_id = teacher_id;
            service.update(&course).await;
        }
        CourseAction::Delete { ids } => {
            let targets = super::collect_targets::<Course>(service, &ids).await;
            service.delete_many(&targets).await;
        }
    }
    Ok(())
}
