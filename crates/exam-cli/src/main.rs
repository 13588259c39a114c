use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("examdesk error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = exam_config::ExamConfig::load_with_dotenv()?;
    tracing::debug!(url = %config.database.url, "configuration loaded");

    let email = cli
        .email
        .clone()
        .or_else(|| std::env::var("EXAMDESK_EMAIL").ok())
        .context("no login email: pass --email or set EXAMDESK_EMAIL")?;
    let password = cli
        .password
        .clone()
        .or_else(|| std::env::var("EXAMDESK_PASSWORD").ok())
        .context("no login password: pass --password or set EXAMDESK_PASSWORD")?;

    let db = exam_db::ExamDb::open(&config.database.url)
        .await
        .context("failed to connect to database")?;
    let identity = {
        let conn = db.conn().context("no database connection")?;
        exam_auth::authenticate(conn, &email, &password).await?
    };

    // Presentation-layer narrowing per role. The service re-checks the role
    // on every mutation, so this is the outer of two gates.
    if !commands::permitted(identity.role, &cli.command) {
        anyhow::bail!("permission denied: your role may not run this command");
    }

    let service = exam_db::service::ExamService::from_db(db, identity);
    let result = commands::dispatch(cli.command, &service, &config).await;

    let reports = service.drain_reports();
    for report in &reports {
        eprintln!("{}", report.message);
    }
    result?;
    if !reports.is_empty() {
        anyhow::bail!("{} operation(s) failed", reports.len());
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXAMDESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
