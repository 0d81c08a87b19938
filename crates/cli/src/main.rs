mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use guide_storage::Storage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "culture-guide")]
#[command(about = "Travel and culture guide to India, served over HTTP", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "GUIDE_DB_PATH")]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database if needed and start the web server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Directory served under /static
        #[arg(long, env = "GUIDE_STATIC_DIR", default_value = "static")]
        static_dir: PathBuf,
    },
    /// Insert the editorial content into empty tables
    Seed,
    /// Print row counts per table
    Stats,
    /// Print one destination as JSON
    Show { title: String },
}

pub(crate) fn get_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("culture-guide")
            .join("site.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_storage(db_path: &Path) -> Result<Storage> {
    ensure_db_dir(db_path)?;
    Ok(Storage::new(db_path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path(cli.db);

    match cli.command {
        Commands::Serve { port, host, static_dir } => {
            commands::serve::run(&db_path, &host, port, static_dir).await
        },
        Commands::Seed => commands::content::run_seed(&db_path),
        Commands::Stats => commands::content::run_stats(&db_path),
        Commands::Show { title } => commands::content::run_show(&db_path, &title),
    }
}
