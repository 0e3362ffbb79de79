use crate::record::Record;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Identifier")]
    pub identifier: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Flags")]
    pub flags: u32,
    #[tabled(rename = "Bytes")]
    pub size: usize,
    #[tabled(rename = "Content")]
    pub preview: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            identifier: record.identifier.clone(),
            kind: record.kind.clone(),
            flags: record.flags,
            size: record.content.len(),
            preview: content_preview(&record.content, 16),
        }
    }
}

/// Hex preview of at most `max_bytes` bytes, with an ellipsis when truncated
pub fn content_preview(content: &[u8], max_bytes: usize) -> String {
    if content.len() <= max_bytes {
        return hex::encode(content);
    }
    format!("{}…", hex::encode(&content[..max_bytes]))
}

pub fn records_table(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
