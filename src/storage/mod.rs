//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - data(identifier, kind, flags, content)
//!
//! Every SQL operation is a [`Statement`] that knows its own text and how to
//! bind its parameters; [`Database`] prepares, binds, steps and decodes.

pub mod schema;
pub mod statement;
pub mod sqlite;

pub use sqlite::Database;
pub use statement::Statement;
