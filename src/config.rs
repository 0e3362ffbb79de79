//! `persistkit.toml` - where the store file lives
//!
//! ```toml
//! database = "data/store.sqlite3"
//! ```
//!
//! A relative `database` is resolved against the directory holding the config
//! file, so the same config works from any working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "persistkit.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PersistConfig {
    pub database: Option<PathBuf>,
}

/// A config together with the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: PersistConfig,
}

impl LoadedConfig {
    /// The configured store path, anchored at the config file's directory
    pub fn database_path(&self) -> Option<PathBuf> {
        let database = self.config.database.as_ref()?;
        if database.is_absolute() {
            return Some(database.clone());
        }
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(database))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Read `path`, or `None` when no config file exists there
pub fn load_config(path: &Path) -> anyhow::Result<Option<LoadedConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    let config: PersistConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(LoadedConfig { path: path.to_path_buf(), config }))
}

pub fn write_config(path: &Path, config: &PersistConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    std::fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

/// Pick the store path: explicit flag first, then the config file.
/// `None` leaves the choice to the bootstrap's platform directory.
pub fn resolve_database_path(flag: Option<PathBuf>, loaded: Option<&LoadedConfig>) -> Option<PathBuf> {
    flag.or_else(|| loaded.and_then(LoadedConfig::database_path))
}
