//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use rusqlite::types::FromSql;
use crate::record::Record;
use crate::{Error, Result};
use super::schema;
use super::statement::Statement;

/// Façade over the record store.
///
/// Owns the connection for its whole lifetime; the connection is released on
/// drop or by [`Database::close`]. `Database` is `Send` but not `Sync`, so
/// sharing one across threads requires an external `Mutex`.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database file (creates if doesn't exist).
    ///
    /// The engine defers reading the file, so the header is read here; a file
    /// that is not a database fails as `Open` rather than at first use.
    pub fn open(path: &Path) -> Result<Self> {
        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open(path).map_err(open_error)?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(open_error)?;
        tracing::debug!("Opened store at {}", path.display());
        Ok(Self { conn, path: Some(path.to_path_buf()) })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the schema if it doesn't exist. Safe to call on every startup.
    pub fn ensure_initialized(&self) -> Result<()> {
        let statement = Statement::Create;
        // Two DDL statements and no placeholders: run as a batch, `bind_to` has nothing to bind
        self.conn.execute_batch(statement.sql()).map_err(Error::Schema)?;
        tracing::debug!("Schema ensured for table '{}'", schema::TABLE_NAME);
        Ok(())
    }

    // ========== Record Operations ==========

    /// Insert or replace a record
    pub fn save(&self, record: &Record) -> Result<()> {
        let changed = self.execute(Statement::Upsert(record))?;
        tracing::debug!(identifier = %record.identifier, changed, "Saved record");
        Ok(())
    }

    /// Get every record.
    ///
    /// Rows that fail to decode are skipped with a warning; the remaining rows
    /// are still returned. Order is the engine's scan order and is not stable.
    pub fn load_all(&self) -> Result<Vec<Record>> {
        let statement = Statement::SelectAll;
        let mut prepared = self.prepare(&statement)?;
        let mut rows = prepared.raw_query();

        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(Error::Step)? {
            match row_to_record(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let identifier: Option<String> = row.get(0).ok();
                    tracing::warn!(?identifier, "Skipping malformed row: {}", e);
                }
            }
        }

        Ok(records)
    }

    /// Get a record by identifier
    pub fn load_by_identifier(&self, identifier: &str) -> Result<Option<Record>> {
        let statement = Statement::SelectByIdentifier(identifier);
        let mut prepared = self.prepare(&statement)?;
        let mut rows = prepared.raw_query();

        let record = match rows.next().map_err(Error::Step)? {
            Some(row) => Some(row_to_record(row)?),
            None => None,
        };
        Ok(record)
    }

    /// Close the connection, reporting any failure to release it
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Close(e))
    }

    // ========== Statement Execution ==========

    /// Prepare and bind. The returned handle finalizes itself when dropped,
    /// so every exit path below releases it.
    fn prepare(&self, statement: &Statement<'_>) -> Result<rusqlite::Statement<'_>> {
        tracing::debug!(statement = statement.name(), "Preparing");
        let mut prepared = self.conn.prepare(statement.sql()).map_err(Error::Prepare)?;
        statement.bind_to(&mut prepared)?;
        Ok(prepared)
    }

    fn execute(&self, statement: Statement<'_>) -> Result<usize> {
        let mut prepared = self.prepare(&statement)?;
        prepared.raw_execute().map_err(Error::Step)
    }
}

/// Helper to convert a row to a Record
fn row_to_record(row: &rusqlite::Row<'_>) -> Result<Record> {
    let identifier: String = column(row, 0)?;
    let kind: String = column(row, 1)?;
    let flags: i64 = column(row, 2)?;
    let flags = u32::try_from(flags).map_err(|_| Error::Decode {
        column: schema::COLUMNS[2],
        reason: format!("{} is not a non-negative 32-bit value", flags),
    })?;
    let content: Vec<u8> = column(row, 3)?;

    Ok(Record { identifier, kind, flags, content })
}

fn column<T: FromSql>(row: &rusqlite::Row<'_>, index: usize) -> Result<T> {
    row.get(index).map_err(|e| Error::Decode {
        column: schema::COLUMNS[index],
        reason: e.to_string(),
    })
}
