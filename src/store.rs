//! Ordered, append-only record store (the "fridge")
//!
//! Insertion order is preserved and is the order both iterator
//! styles report matches in.

use std::io::BufRead;

use tracing::debug;

use crate::error::IterError;
use crate::record::Record;

/// Ordered collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The demonstration fridge: three fruits followed by two meats
    pub fn sample() -> Self {
        let mut fridge = Self::new();
        fridge.push(Record::new("fruit", "apple", 4));
        fridge.push(Record::new("fruit", "orange", 2));
        fridge.push(Record::new("fruit", "pear", 3));
        fridge.push(Record::new("meat", "rhino", 1));
        fridge.push(Record::new("meat", "beef", 1));
        fridge
    }

    /// Load records from a line-oriented source
    ///
    /// Blank lines and `#` comments are skipped. The first malformed
    /// line fails the whole load.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, IterError> {
        let mut store = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            store.push(Record::parse_line(trimmed, idx + 1)?);
        }

        debug!(records = store.len(), "loaded record store");
        Ok(store)
    }

    /// Append a record at the end
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for RecordStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
