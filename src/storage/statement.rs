//! Self-describing SQL statements
//!
//! Each variant owns fixed, schema-defined SQL text and binds its own
//! positional parameters. Statements are built per call and consumed
//! immediately by the façade; nothing is cached across calls.

use rusqlite::ToSql;
use crate::record::Record;
use crate::{Error, Result};
use super::schema;

/// One of the four operations the store supports
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    /// Idempotent schema DDL, no placeholders
    Create,
    /// Insert-or-replace keyed on identifier
    Upsert(&'a Record),
    /// Zero or one row for the given identifier
    SelectByIdentifier(&'a str),
    /// Every row, in the engine's natural order
    SelectAll,
}

impl Statement<'_> {
    /// The SQL text for this statement
    pub fn sql(&self) -> &'static str {
        match self {
            Statement::Create => schema::CREATE_SCHEMA,
            Statement::Upsert(_) => schema::UPSERT_RECORD,
            Statement::SelectByIdentifier(_) => schema::SELECT_BY_IDENTIFIER,
            Statement::SelectAll => schema::SELECT_ALL,
        }
    }

    /// Number of positional placeholders in [`Statement::sql`]
    pub fn parameter_count(&self) -> usize {
        match self {
            Statement::Create | Statement::SelectAll => 0,
            Statement::Upsert(_) => 4,
            Statement::SelectByIdentifier(_) => 1,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Create => "create",
            Statement::Upsert(_) => "upsert",
            Statement::SelectByIdentifier(_) => "select_by_identifier",
            Statement::SelectAll => "select_all",
        }
    }

    /// Bind this statement's parameters into a prepared handle.
    ///
    /// All values are validated before the first bind call, so a rejected
    /// record never leaves a partially bound handle behind. The handle is
    /// the only state touched.
    pub fn bind_to(&self, prepared: &mut rusqlite::Statement<'_>) -> Result<()> {
        let holes = prepared.parameter_count();
        if holes != self.parameter_count() {
            return Err(Error::Bind {
                index: 0,
                reason: format!(
                    "{} expects {} parameters but SQL has {}",
                    self.name(),
                    self.parameter_count(),
                    holes
                ),
            });
        }

        match self {
            Statement::Create | Statement::SelectAll => Ok(()),
            Statement::Upsert(record) => {
                let identifier = encode_identifier(1, &record.identifier)?;
                let kind = encode_text(2, &record.kind)?;
                let flags = i32::try_from(record.flags).map_err(|_| Error::Bind {
                    index: 3,
                    reason: format!("flags {:#x} do not fit a 32-bit integer", record.flags),
                })?;

                bind(prepared, 1, identifier)?;
                bind(prepared, 2, kind)?;
                bind(prepared, 3, flags)?;
                bind(prepared, 4, record.content.as_slice())
            }
            Statement::SelectByIdentifier(identifier) => {
                let identifier = encode_identifier(1, identifier)?;
                bind(prepared, 1, identifier)
            }
        }
    }
}

/// Validate text destined for a TEXT column.
///
/// Rust strings are always UTF-8; the remaining failure is an interior NUL,
/// which the engine's C string boundary cannot represent faithfully.
fn encode_text(index: usize, value: &str) -> Result<&str> {
    if value.contains('\0') {
        return Err(Error::Bind {
            index,
            reason: "text contains a NUL character".to_string(),
        });
    }
    Ok(value)
}

fn encode_identifier(index: usize, value: &str) -> Result<&str> {
    if value.is_empty() {
        return Err(Error::Bind {
            index,
            reason: "identifier must not be empty".to_string(),
        });
    }
    encode_text(index, value)
}

fn bind<T: ToSql>(prepared: &mut rusqlite::Statement<'_>, index: usize, value: T) -> Result<()> {
    prepared
        .raw_bind_parameter(index, value)
        .map_err(|e| Error::Bind { index, reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn schema_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::CREATE_SCHEMA).unwrap();
        conn
    }

    #[test]
    fn test_parameter_counts_match_sql() {
        let conn = schema_conn();
        let record = Record::new("a", "note", 1, vec![1]);

        for statement in [
            Statement::Upsert(&record),
            Statement::SelectByIdentifier("a"),
            Statement::SelectAll,
        ] {
            let prepared = conn.prepare(statement.sql()).unwrap();
            assert_eq!(prepared.parameter_count(), statement.parameter_count(), "{}", statement.name());
        }
    }

    #[test]
    fn test_create_is_idempotent_ddl() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(Statement::Create.sql()).unwrap();
        conn.execute_batch(Statement::Create.sql()).unwrap();
        assert_eq!(Statement::Create.parameter_count(), 0);

        // Nothing to bind: the no-op binder accepts any placeholder-free handle
        let mut prepared = conn.prepare(schema::SELECT_ALL).unwrap();
        Statement::Create.bind_to(&mut prepared).unwrap();
    }

    #[test]
    fn test_upsert_binds_in_order() {
        let conn = schema_conn();
        let record = Record::new("id-1", "note", 7, vec![0xde, 0xad]);
        let statement = Statement::Upsert(&record);

        let mut prepared = conn.prepare(statement.sql()).unwrap();
        statement.bind_to(&mut prepared).unwrap();
        assert_eq!(prepared.raw_execute().unwrap(), 1);

        let (kind, flags, content): (String, i64, Vec<u8>) = conn
            .query_row("SELECT kind, flags, content FROM data WHERE identifier = 'id-1'", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .unwrap();
        assert_eq!(kind, "note");
        assert_eq!(flags, 7);
        assert_eq!(content, vec![0xde, 0xad]);
    }

    #[test]
    fn test_empty_content_is_blob_not_null() {
        let conn = schema_conn();
        let record = Record::new("empty", "note", 0, Vec::new());
        let statement = Statement::Upsert(&record);

        let mut prepared = conn.prepare(statement.sql()).unwrap();
        statement.bind_to(&mut prepared).unwrap();
        prepared.raw_execute().unwrap();

        let kind: String = conn
            .query_row("SELECT typeof(content) FROM data WHERE identifier = 'empty'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(kind, "blob");
    }

    #[test]
    fn test_bind_rejects_invalid_values() {
        let conn = schema_conn();
        let cases = [
            (Record::new("", "note", 0, Vec::new()), 1),
            (Record::new("bad\0id", "note", 0, Vec::new()), 1),
            (Record::new("a", "no\0te", 0, Vec::new()), 2),
            (Record::new("a", "note", u32::MAX, Vec::new()), 3),
        ];

        for (record, expected_index) in cases {
            let statement = Statement::Upsert(&record);
            let mut prepared = conn.prepare(statement.sql()).unwrap();
            match statement.bind_to(&mut prepared) {
                Err(Error::Bind { index, .. }) => assert_eq!(index, expected_index),
                other => panic!("expected bind failure, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_bind_rejects_mismatched_handle() {
        let conn = schema_conn();
        let mut prepared = conn.prepare(schema::SELECT_ALL).unwrap();
        let result = Statement::SelectByIdentifier("a").bind_to(&mut prepared);
        assert!(matches!(result, Err(Error::Bind { index: 0, .. })));
    }
}
