//! tvgraph CLI - inspect and walk TV series data in a graph snapshot

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{check, entity, traverse};
use config::Config;
use tvgraph_core::GraphSession;
use tvgraph_storage::MemoryStore;

#[derive(Parser)]
#[command(name = "tvgraph")]
#[command(author, version, about = "Navigate series, seasons and episodes in a knowledge graph")]
pub struct Cli {
    /// Snapshot file to read items from
    #[arg(short, long, env = "TVGRAPH_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an item's facts
    Show(entity::ShowArgs),
    /// Resolve the containing season or series
    Parent(traverse::ParentArgs),
    /// Resolve the next season or episode
    Next(traverse::NextArgs),
    /// Evaluate the constraints for an entity
    Check(check::CheckArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// Application context with the graph session
pub struct AppContext {
    pub session: GraphSession,
    pub config: Config,
}

impl AppContext {
    pub async fn new(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let Some(path) = cli.snapshot.clone().or_else(|| config.snapshot.clone()) else {
            anyhow::bail!(
                "No snapshot configured. Pass --snapshot <FILE> or run `tvgraph config set snapshot <FILE>`."
            );
        };
        tracing::debug!("Using snapshot at: {:?}", path);

        let store = MemoryStore::load_snapshot(&path)?;

        Ok(Self {
            session: GraphSession::from_backend(Arc::new(store)),
            config,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting tvgraph CLI");

    // Config commands never touch the snapshot
    if let Commands::Config(args) = &cli.command {
        return commands::config::run(args).await;
    }

    let ctx = AppContext::new(&cli, Config::load()).await?;

    match &cli.command {
        Commands::Show(args) => entity::run(args, &cli, &ctx).await?,
        Commands::Parent(args) => traverse::run_parent(args, &cli, &ctx).await?,
        Commands::Next(args) => traverse::run_next(args, &cli, &ctx).await?,
        Commands::Check(args) => check::run(args, &cli, &ctx).await?,
        Commands::Config(_) => {}
    }

    Ok(())
}
