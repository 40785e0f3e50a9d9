//! Push-based traversal over the fruits in a store
//!
//! No cursor is exposed. The traversal runs synchronously on the
//! caller's thread and returns only after the scan is complete.

use std::convert::Infallible;

use tracing::trace;

use crate::predicate::is_fruit;
use crate::record::Record;
use crate::store::RecordStore;

/// Invoke `action` once per fruit in `fridge`, in store order
pub fn for_each_fruit<F>(fridge: &RecordStore, mut action: F)
where
    F: FnMut(&Record),
{
    let result: Result<(), Infallible> = try_for_each_fruit(fridge, |fruit| {
        action(fruit);
        Ok(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible variant of [`for_each_fruit`]
///
/// The first error returned by `action` stops the scan and is handed
/// back to the caller unchanged.
pub fn try_for_each_fruit<F, E>(fridge: &RecordStore, mut action: F) -> Result<(), E>
where
    F: FnMut(&Record) -> Result<(), E>,
{
    for (index, record) in fridge.iter().enumerate() {
        if is_fruit(record) {
            trace!(index, "internal iterator visiting record");
            action(record)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_fruits_in_order() {
        let mut seen = Vec::new();
        for_each_fruit(&RecordStore::sample(), |fruit| {
            seen.push((fruit.name().to_string(), fruit.quantity()));
        });

        assert_eq!(
            seen,
            vec![
                ("apple".to_string(), 4),
                ("orange".to_string(), 2),
                ("pear".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_empty_store_never_calls_action() {
        let mut calls = 0;
        for_each_fruit(&RecordStore::new(), |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_action_error_stops_traversal() {
        let mut seen = Vec::new();
        let result = try_for_each_fruit(&RecordStore::sample(), |fruit| {
            if fruit.name() == "orange" {
                return Err(format!("cannot handle {}", fruit.name()));
            }
            seen.push(fruit.name().to_string());
            Ok(())
        });

        assert_eq!(result, Err("cannot handle orange".to_string()));
        assert_eq!(seen, ["apple"]);
    }
}
