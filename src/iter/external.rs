//! Pull-based iterator over the fruits in a store
//!
//! The filtered records are copied out of the store at construction,
//! so the iterator holds no borrow of the store afterwards.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::IterError;
use crate::predicate::is_fruit;
use crate::record::Record;
use crate::store::RecordStore;

/// Stateful cursor over a snapshot of the fruits in a store
///
/// States: has-more while `position < len`, exhausted once they are
/// equal. Exhausted is terminal.
#[derive(Debug, Clone)]
pub struct FruitIterator {
    fruits: Vec<Record>,
    position: usize,
}

impl FruitIterator {
    /// Snapshot the fruits of `fridge` and position the cursor at the start
    pub fn new(fridge: &RecordStore) -> Self {
        let fruits: Vec<Record> = fridge.iter().filter(|r| is_fruit(r)).cloned().collect();
        debug!(
            store = fridge.len(),
            fruits = fruits.len(),
            "created external iterator"
        );
        Self {
            fruits,
            position: 0,
        }
    }

    /// True while a call to [`get_next`](Self::get_next) would succeed
    pub fn has_next(&self) -> bool {
        self.position < self.fruits.len()
    }

    /// Return the record under the cursor and advance by one
    ///
    /// Fails with [`IterError::Exhausted`] once every fruit has been
    /// returned; the cursor does not move in that case.
    pub fn get_next(&mut self) -> Result<&Record, IterError> {
        let len = self.fruits.len();
        if self.position >= len {
            debug!(position = self.position, len, "pull past end of iterator");
            return Err(IterError::Exhausted {
                position: self.position,
                len,
            });
        }

        let index = self.position;
        self.position += 1;
        trace!(index, "external iterator advanced");
        Ok(&self.fruits[index])
    }

    /// Number of successful pulls so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of pulls left before exhaustion
    pub fn remaining(&self) -> usize {
        self.fruits.len() - self.position
    }

    /// Size of the filtered snapshot
    pub fn fruit_count(&self) -> usize {
        self.fruits.len()
    }
}

impl Iterator for FruitIterator {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if !self.has_next() {
            return None;
        }
        self.get_next().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FruitIterator {}

impl FusedIterator for FruitIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulls_fruits_in_order() {
        let mut iterator = FruitIterator::new(&RecordStore::sample());
        let mut pulled = Vec::new();
        while iterator.has_next() {
            let fruit = iterator.get_next().expect("has_next was true");
            pulled.push((fruit.name().to_string(), fruit.quantity()));
        }

        assert_eq!(
            pulled,
            vec![
                ("apple".to_string(), 4),
                ("orange".to_string(), 2),
                ("pear".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_fourth_pull_is_exhausted() {
        let mut iterator = FruitIterator::new(&RecordStore::sample());
        for _ in 0..3 {
            iterator.get_next().expect("fruit available");
        }

        assert!(!iterator.has_next());
        assert!(matches!(
            iterator.get_next(),
            Err(IterError::Exhausted {
                position: 3,
                len: 3
            })
        ));
        // Exhausted is terminal and the failed pull does not move the cursor
        assert_eq!(iterator.position(), 3);
        assert!(!iterator.has_next());
    }

    #[test]
    fn test_empty_store_is_exhausted_immediately() {
        let mut iterator = FruitIterator::new(&RecordStore::new());
        assert_eq!(iterator.fruit_count(), 0);
        assert!(!iterator.has_next());
        assert!(iterator.get_next().is_err());
    }

    #[test]
    fn test_snapshot_is_independent_of_store() {
        let mut fridge = RecordStore::sample();
        let iterator = FruitIterator::new(&fridge);
        fridge.push(Record::new("fruit", "plum", 9));

        assert_eq!(iterator.fruit_count(), 3);
        assert_eq!(FruitIterator::new(&fridge).fruit_count(), 4);
    }

    #[test]
    fn test_std_iterator_view() {
        let mut iterator = FruitIterator::new(&RecordStore::sample());
        iterator.get_next().expect("apple");
        assert_eq!(iterator.fruit_count(), 3);
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.remaining(), 2);

        let rest: Vec<String> = iterator.by_ref().map(|r| r.name().to_string()).collect();
        assert_eq!(rest, ["orange", "pear"]);
        assert_eq!(iterator.next(), None);
    }
}
