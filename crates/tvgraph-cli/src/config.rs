//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tvgraph_core::EntityKind;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TVGRAPH_CONFIG";

/// Get default config directory
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tvgraph")
}

/// Path of the config file in use
pub fn config_file_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_dir().join("config.toml"))
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot used when --snapshot is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,

    /// Kind assumed when --kind is not given
    pub default_kind: EntityKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: None,
            default_kind: EntityKind::Episode,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_file_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Keys with a one-line description each
    pub fn keys() -> &'static [(&'static str, &'static str)] {
        &[
            ("snapshot", "snapshot file used when --snapshot is not given"),
            ("default_kind", "series, season or episode; used when --kind is not given"),
        ]
    }

    /// Current value of a key; `None` when the key is unset
    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match key {
            "snapshot" => Ok(self.snapshot.as_ref().map(|p| p.display().to_string())),
            "default_kind" => Ok(Some(self.default_kind.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a key; an empty snapshot value clears it
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "snapshot" => {
                self.snapshot = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "default_kind" => {
                self.default_kind = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    let known: Vec<&str> = Config::keys().iter().map(|(name, _)| *name).collect();
    anyhow::anyhow!("Unknown config key: {} (available: {})", key, known.join(", "))
}
