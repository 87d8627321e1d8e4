use clap::Parser;
use std::process::ExitCode;

use admast::cli::args::{Cli, Commands};
use admast::cli::{faces, init, media_items, routes, seed, workspaces};
use admast::error::exit_codes;
use admast::store::Store;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("ADMAST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> admast::Result<()> {
    let format = cli.output_format();

    // Init runs before any store exists
    if let Commands::Init = cli.command {
        return init::init_store(cli.home.as_deref()).await;
    }

    // The pool is opened once here and handed to every command; it is the
    // only database handle in the process.
    let store = Store::find(cli.home.as_deref())?;
    let pool = store.open().await?;

    let result = dispatch(&pool, cli.command, format).await;

    pool.close().await;
    result
}

async fn dispatch(
    pool: &sqlx::SqlitePool,
    command: Commands,
    format: admast::output::OutputFormat,
) -> admast::Result<()> {
    match command {
        Commands::Init => unreachable!("handled before the store is opened"),

        Commands::Workspaces { action } => workspaces::workspaces(pool, action, format).await,

        Commands::Workspace { id, action } => workspaces::workspace(pool, id, action, format).await,

        Commands::Items {
            workspace_id,
            action,
        } => media_items::items(pool, workspace_id, action, format).await,

        Commands::Item { id, action } => media_items::item(pool, id, action, format).await,

        Commands::Face { id, action } => faces::face(pool, id, action, format).await,

        Commands::Route { id, action } => routes::route(pool, id, action, format).await,

        Commands::Seed { file } => seed::seed(pool, &file).await,
    }
}
