use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use exam_config::ExamConfig;
use exam_db::service::ExamService;

use crate::cli::ReportAction;

pub async fn handle(
    action: ReportAction,
    service: &ExamService,
    config: &ExamConfig,
) -> anyhow::Result<()> {
    let path = match action {
        ReportAction::Course { id, dir } => {
            let dir = resolve_dir(dir, config)?;
            exam_export::course_report(service, id, &dir).await?
        }
        ReportAction::Card { dir } => {
            let dir = resolve_dir(dir, config)?;
            let email = service.identity().email.clone();
            exam_export::student_report(service, &email, &dir).await?
        }
    };
    println!("Wrote {}.", path.display());
    Ok(())
}

fn resolve_dir(dir: Option<PathBuf>, config: &ExamConfig) -> anyhow::Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&config.export.directory));
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create report directory {}", dir.display()))?;
    Ok(dir)
}
