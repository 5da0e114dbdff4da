mod app;
mod cache;
mod commands;
mod config;
mod handlers;
mod import;
mod output;
mod state;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    commands::{load_fruits::LoadFruitsCommand, serve::ServeCommand},
    config::Config,
};

/// Fruitbasket - Serve a cached list of fruits and bulk-load them from JSON
#[derive(Parser, Debug)]
#[command(name = "fruitbasket")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "fruitbasket.db", env = "SQLITE_PATH")]
    sqlite_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Replace every stored fruit with the contents of a JSON file
    #[command(name = "load_fruits")]
    LoadFruits(LoadFruitsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The importer reports to stdout, so it stays quiet unless asked.
    let default_filter = match cli.command {
        Commands::Serve(_) => "fruitbasket=debug,tower_http=debug",
        Commands::LoadFruits(_) => "fruitbasket=warn",
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    match cli.command {
        Commands::Serve(cmd) => commands::serve::run(cmd, &cli.sqlite_path, config).await,
        Commands::LoadFruits(cmd) => {
            commands::load_fruits::run(cmd, &cli.sqlite_path, config).await
        }
    }
}
