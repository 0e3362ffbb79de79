//! Startup sequence: resolve where the store lives, open it, ensure the schema.
//!
//! Nothing here terminates the process. Failures come back as
//! [`StartupError`] and the entry point decides how to halt.

use std::path::{Path, PathBuf};
use crate::storage::Database;

/// File name of the store inside the resolved directory
pub const DATABASE_FILE_NAME: &str = "persistkit.sqlite3";

/// Subdirectory created under the platform data directory
pub const APP_DIR_NAME: &str = "persistkit";

/// Errors that make the store unusable for the session
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Could not access the filesystem: no data directory for this platform")]
    NoDataDir,

    #[error("Could not create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] crate::Error),
}

/// Supplies a writable directory for the store file
pub trait PathProvider {
    fn writable_dir(&self) -> Result<PathBuf, StartupError>;
}

/// Platform data directory, e.g. `~/.local/share/persistkit`
#[derive(Debug, Default, Clone, Copy)]
pub struct DataDirProvider;

impl PathProvider for DataDirProvider {
    fn writable_dir(&self) -> Result<PathBuf, StartupError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(StartupError::NoDataDir)
    }
}

/// A caller-chosen directory
#[derive(Debug, Clone)]
pub struct FixedDirProvider(pub PathBuf);

impl PathProvider for FixedDirProvider {
    fn writable_dir(&self) -> Result<PathBuf, StartupError> {
        Ok(self.0.clone())
    }
}

/// Resolve the store location through `provider` and open it ready for use
pub fn bootstrap(provider: &dyn PathProvider) -> Result<Database, StartupError> {
    let dir = provider.writable_dir()?;
    open_at(&dir.join(DATABASE_FILE_NAME))
}

/// Open the store at an explicit file path, creating parent directories and
/// the schema as needed.
pub fn open_at(path: &Path) -> Result<Database, StartupError> {
    ensure_db_dir(path)?;

    let db = Database::open(path)?;
    db.ensure_initialized()?;

    tracing::info!("Initialized database at: {}", path.display());
    Ok(db)
}

fn ensure_db_dir(db_path: &Path) -> Result<(), StartupError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| StartupError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
