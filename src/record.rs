//! Fixed-shape fridge record
//!
//! A record is immutable once built: fields are private and only
//! exposed through accessors.

use crate::error::IterError;

/// A single tagged entry in the fridge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    kind: String,
    name: String,
    quantity: u32,
}

impl Record {
    /// Create a record from its category tag, name and count
    pub fn new(kind: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Category tag, e.g. `fruit` or `meat`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many of this item are stored
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Parse a `<kind> <name> <quantity>` line
    ///
    /// Fields are separated by any whitespace (tabs in practice).
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self, IterError> {
        let mut fields = line.split_whitespace();
        let kind = fields
            .next()
            .ok_or_else(|| IterError::malformed(line_no, "missing kind"))?;
        let name = fields
            .next()
            .ok_or_else(|| IterError::malformed(line_no, "missing name"))?;
        let quantity_str = fields
            .next()
            .ok_or_else(|| IterError::malformed(line_no, "missing quantity"))?;

        if let Some(extra) = fields.next() {
            return Err(IterError::malformed(
                line_no,
                format!("unexpected trailing field '{}'", extra),
            ));
        }

        let quantity = quantity_str.parse::<u32>().map_err(|_| {
            IterError::malformed(line_no, format!("invalid quantity '{}'", quantity_str))
        })?;

        Ok(Self::new(kind, name, quantity))
    }
}
