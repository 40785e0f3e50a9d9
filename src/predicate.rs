//! Filter predicate shared by both iterator styles

use crate::record::Record;

/// Category tag selected by the iterators
pub const FRUIT_KIND: &str = "fruit";

/// True iff the record is tagged `fruit`
pub fn is_fruit(record: &Record) -> bool {
    record.kind() == FRUIT_KIND
}
