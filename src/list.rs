//! Record list - the view a presentation layer holds over the store

use crate::record::Record;
use crate::storage::Database;
use crate::Result;

/// Snapshot of every stored record, refreshed after each change.
///
/// Borrows the [`Database`] it was built from; the store is constructed once
/// at startup and handed in, never created lazily here.
pub struct RecordList<'db> {
    db: &'db Database,
    records: Vec<Record>,
}

impl<'db> RecordList<'db> {
    /// Load all records from `db`
    pub fn load(db: &'db Database) -> Result<Self> {
        let records = db.load_all()?;
        Ok(Self { db, records })
    }

    /// Save a record, then reload the snapshot
    pub fn add(&mut self, record: &Record) -> Result<()> {
        tracing::debug!(identifier = %record.identifier, "Adding record");
        self.db.save(record)?;
        self.records = self.db.load_all()?;
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
