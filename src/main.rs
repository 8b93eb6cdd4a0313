use clap::{Parser, Subcommand};

use trivia_api::config::Settings;
use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load()?;
    let pool = db::establish_connection(&settings.database.path).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => db::run_migrations(&pool).await?,
        Commands::Serve => {
            tracing::info!("Running db migrations...");
            db::run_migrations(&pool).await?;
            run_server(settings, pool).await?;
        }
    }
    Ok(())
}
