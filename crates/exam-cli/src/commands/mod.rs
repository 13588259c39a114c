//! Command handlers, one module per subcommand.

pub mod course;
pub mod department;
pub mod exam;
pub mod export;
pub mod report;
pub mod student;
pub mod teacher;
pub mod user;

use exam_config::ExamConfig;
use exam_core::enums::Role;
use exam_db::record::Record;
use exam_db::service::ExamService;

use crate::cli::{Commands, CourseAction, DepartmentAction, ExamAction, ReportAction, StudentAction, TeacherAction};

pub async fn dispatch(
    command: Commands,
    service: &ExamService,
    config: &ExamConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Department { action } => department::handle(action, service).await,
        Commands::Teacher { action } => teacher::handle(action, service).await,
        Commands::Student { action } => student::handle(action, service).await,
        Commands::Course { action } => course::handle(action, service).await,
        Commands::Exam { action } => exam::handle(action, service).await,
        Commands::User { action } => user::handle(action, service).await,
        Commands::Export(args) => export::handle(&args, service, config).await,
        Commands::Report { action } => report::handle(action, service, config).await,
    }
}

/// Which commands a role may even attempt. Admins get everything; teachers
/// get the read side plus course reports; students get their own exam list
/// and their own report card.
#[must_use]
pub fn permitted(role: Role, command: &Commands) -> bool {
    match role {
        Role::Admin => true,
        Role::Teacher => {
            is_list(command)
                || matches!(
                    command,
                    Commands::Report {
                        action: ReportAction::Course { .. }
                    } | Commands::Export(_)
                )
        }
        Role::Student => matches!(
            command,
            Commands::Exam {
                action: ExamAction::List
            } | Commands::Report {
                action: ReportAction::Card { .. }
            }
        ),
    }
}

fn is_list(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Department {
            action: DepartmentAction::List
        } | Commands::Teacher {
            action: TeacherAction::List
        } | Commands::Student {
            action: StudentAction::List
        } | Commands::Course {
            action: CourseAction::List
        } | Commands::Exam {
            action: ExamAction::List
        }
    )
}

/// Resolve each id to its row, warning on the ones that no longer exist.
/// Rows vetoed by a referential guard are reported through the service's
/// error channel, not here.
pub(crate) async fn collect_targets<T: Record>(service: &ExamService, ids: &[i64]) -> Vec<T> {
    let mut targets = Vec::with_capacity(ids.len());
    for &id in ids {
        match service.find_by_id::<T>(id).await {
            Some(entity) => targets.push(entity),
            None => eprintln!("no {} with id {id}, skipping", T::TABLE),
        }
    }
    targets
}
