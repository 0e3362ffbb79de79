//! Record - the unit of stored data
//!
//! A record is a plain value: loading one produces an independent copy with
//! no link back to the store, and changes only persist once saved again.

/// A stored record keyed by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Unique, non-empty key
    pub identifier: String,
    /// Free-form classification (e.g. "note", "task")
    pub kind: String,
    /// Bit set of record flags
    pub flags: u32,
    /// Opaque payload, may be empty
    pub content: Vec<u8>,
}

impl Record {
    /// Create a new record
    pub fn new(
        identifier: impl Into<String>,
        kind: impl Into<String>,
        flags: u32,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            kind: kind.into(),
            flags,
            content: content.into(),
        }
    }

    /// True when every bit of `mask` is set
    pub fn has_flags(&self, mask: u32) -> bool {
        self.flags & mask == mask
    }
}
