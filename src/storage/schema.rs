//! Database schema definitions
//!
//! The `data` table is the on-disk contract; column names, types and
//! constraints must not change.

/// Name of the single record table
pub const TABLE_NAME: &str = "data";

/// Name of the explicit identifier index
pub const IDENTIFIER_INDEX: &str = "data_identifier_pkey";

/// SQL to create the record table and its identifier index
pub const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS data (
    identifier TEXT PRIMARY KEY UNIQUE NOT NULL,
    kind       TEXT NOT NULL,
    flags      INTEGER NOT NULL,
    content    BLOB NOT NULL
);

CREATE INDEX IF NOT EXISTS data_identifier_pkey ON data (identifier);
"#;

/// Insert a record, replacing kind/flags/content when the identifier exists
pub const UPSERT_RECORD: &str = r#"
INSERT INTO data (identifier, kind, flags, content)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(identifier) DO
    UPDATE SET kind = excluded.kind,
        flags = excluded.flags,
        content = excluded.content
"#;

/// Select one record by identifier
pub const SELECT_BY_IDENTIFIER: &str =
    "SELECT identifier, kind, flags, content FROM data WHERE identifier = ?1";

/// Select every record in natural scan order
pub const SELECT_ALL: &str = "SELECT identifier, kind, flags, content FROM data";

/// Column names in table order, used for decode diagnostics
pub const COLUMNS: [&str; 4] = ["identifier", "kind", "flags", "content"];
