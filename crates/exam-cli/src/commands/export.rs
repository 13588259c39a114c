use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use exam_config::ExamConfig;
use exam_db::service::ExamService;

use crate::cli::ExportArgs;

pub async fn handle(
    args: &ExportArgs,
    service: &ExamService,
    config: &ExamConfig,
) -> anyhow::Result<()> {
    let dir: PathBuf = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.directory));
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create export directory {}", dir.display()))?;

    exam_export::export_all(service, &dir).await?;
    println!("Finished exporting the database to {}.", dir.display());
    Ok(())
}
