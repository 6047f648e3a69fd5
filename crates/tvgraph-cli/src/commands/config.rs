//! Config command: default snapshot and entity kind

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print a config value
    Get {
        /// snapshot or default_kind
        key: String,
    },
    /// Set a config value
    Set {
        /// snapshot or default_kind
        key: String,
        value: String,
    },
    /// Clear the default snapshot
    Unset,
    /// List all keys with their values
    List,
    /// Show config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Snapshot to record as the default
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Get { key } => {
            let value = Config::load().get(key)?;
            println!("{}", value.unwrap_or_default());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load();
            if key == "snapshot" && !value.is_empty() {
                config.snapshot = Some(snapshot_path(Path::new(value)));
            } else {
                config.set(key, value)?;
            }
            config.save()?;
            println!("{} = {}", key, config.get(key)?.unwrap_or_default());
        }
        ConfigCommands::Unset => {
            let mut config = Config::load();
            config.snapshot = None;
            config.save()?;
            println!("Cleared default snapshot");
        }
        ConfigCommands::List => {
            let config = Config::load();
            println!("# {}", config_file_path().display());
            for (key, description) in Config::keys() {
                let value = config.get(key)?.unwrap_or_else(|| "(not set)".to_string());
                println!("{} = {}    # {}", key, value, description);
            }
        }
        ConfigCommands::Path => println!("{}", config_file_path().display()),
        ConfigCommands::Init { snapshot, force } => {
            let path = config_file_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            let config = Config {
                snapshot: snapshot.as_deref().map(snapshot_path),
                ..Config::default()
            };
            config.save()?;
            println!("Created config file at {}", path.display());
        }
    }
    Ok(())
}

/// Absolute path for a snapshot that exists; others are kept as given
fn snapshot_path(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(absolute) => absolute,
        Err(e) => {
            tracing::warn!("Snapshot {} is not readable yet: {}", path.display(), e);
            path.to_path_buf()
        }
    }
}
