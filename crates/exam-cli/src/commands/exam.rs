use exam_core::entities::{Exam, NewExam};
use exam_core::enums::{Grade, Role};
use exam_db::service::ExamService;

use crate::cli::ExamAction;

pub async fn handle(action: ExamAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        ExamAction::List => {
            // A student only ever sees the exams tied to their own email.
            let exams = if service.identity().role == Role::Student {
                service
                    .exams_by_student_email(&service.identity().email)
                    .await
            } else {
                service.find_all::<Exam>().await
            };
            for exam in exams {
                println!(
                    "{:>4}  student {}  course {}  {}  {}",
                    exam.id, exam.student_id, exam.course_id, exam.exam_date, exam.grade
                );
            }
        }
        ExamAction::Add {
            student_id,
            course_id,
            exam_date,
            grade,
        } => {
            let new = match grade {
                Some(grade) => NewExam::graded(student_id, course_id, exam_date, grade),
                None => NewExam::ungraded(student_id, course_id, exam_date),
            };
            if let Some(id) = service.add::<Exam>(&new).await {
                println!("Added exam {id}.");
            }
        }
        ExamAction::Update {
            id,
            student_id,
            course_id,
            exam_date,
            grade,
        } => {
            let Some(mut exam) = service.find_by_id::<Exam>(id).await else {
                anyhow::bail!("no exam with id {id}");
            };
            exam.student_id = student_id;
            exam.course_id = course_id;
            exam.exam_date = exam_date;
            exam.grade = grade.unwrap_or(Grade::NoGrade);
            service.update(&exam).await;
        }
        ExamAction::Delete { ids } => {
            let targets = super::collect_targets::<Exam>(service, &ids).await;
            service.delete_many(&targets).await;
        }
    }
    Ok(())
}
