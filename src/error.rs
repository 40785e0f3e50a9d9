//! Errors surfaced by the record store and the iterators

use thiserror::Error;

/// Errors that can occur while loading or iterating a fridge
#[derive(Error, Debug)]
pub enum IterError {
    /// `get_next` was called after the iterator ran out of records
    #[error("iterator exhausted: position {position} of {len}")]
    Exhausted {
        /// Cursor position at the time of the call
        position: usize,
        /// Length of the filtered snapshot
        len: usize,
    },

    /// A record line did not have the `<kind> <name> <quantity>` shape
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Reading the record source failed
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
}

impl IterError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
