//! # PersistKit - Embedded Key-Record Store
//!
//! A small persistence layer that keeps typed records in a single SQLite table.
//!
//! PersistKit provides:
//! - A `Record` value type (identifier, kind, flags, content)
//! - Self-describing statements that carry their SQL and bind their own parameters
//! - A `Database` façade that executes statements and decodes rows into records
//! - A bootstrap that resolves the store location and guarantees the schema

pub mod record;
pub mod storage;
pub mod bootstrap;
pub mod list;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use record::Record;
pub use storage::{Database, Statement};
pub use bootstrap::{bootstrap, open_at, DataDirProvider, FixedDirProvider, PathProvider, StartupError};
pub use list::RecordList;

/// Result type alias for PersistKit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open store at {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Schema creation failed: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Statement rejected at prepare: {0}")]
    Prepare(#[source] rusqlite::Error),

    #[error("Bind failed for parameter {index}: {reason}")]
    Bind { index: usize, reason: String },

    #[error("Statement execution failed: {0}")]
    Step(#[source] rusqlite::Error),

    #[error("Cannot release store connection: {0}")]
    Close(#[source] rusqlite::Error),

    #[error("Cannot decode column '{column}': {reason}")]
    Decode { column: &'static str, reason: String },
}
