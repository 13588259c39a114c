use exam_db::service::ExamService;

use crate::cli::UserAction;

pub async fn handle(action: UserAction, service: &ExamService) -> anyhow::Result<()> {
    match action {
        UserAction::List => {
            for email in service.list_users().await {
                println!("{email}");
            }
        }
        UserAction::Add {
            email,
            password,
            role,
        } => {
            if service.add_user(&email, &password, role).await {
                println!("User '{email}' added successfully.");
            }
        }
        UserAction::Delete { email } => {
            if service.delete_user(&email).await {
                println!("User '{email}' deleted successfully.");
            }
        }
    }
    Ok(())
}
