//! # Fridge iterators
//!
//! Two ways of walking the fruits stored in a fridge of tagged records.
//!
//! ## Iteration styles
//!
//! 1. **External**: [`FruitIterator`] snapshots the matching records and
//!    hands them out one at a time through `has_next` / `get_next`.
//!    The consumer drives the loop.
//! 2. **Internal**: [`for_each_fruit`] scans the store itself and calls
//!    a closure for every match. The traversal drives the loop.
//!
//! Both styles yield the same records in the same (store) order.
//!
//! ## Usage Example
//!
//! ```rust
//! use fridge::{for_each_fruit, FruitIterator, RecordStore};
//!
//! let fridge = RecordStore::sample();
//!
//! let mut iterator = FruitIterator::new(&fridge);
//! while iterator.has_next() {
//!     let fruit = iterator.get_next()?;
//!     println!("external iterator! fruit: {}, {}", fruit.name(), fruit.quantity());
//! }
//!
//! for_each_fruit(&fridge, |fruit| {
//!     println!("internal iterator! fruit: {}, {}", fruit.name(), fruit.quantity());
//! });
//! # Ok::<(), fridge::IterError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod error;     // Error taxonomy
pub mod iter;      // External and internal iterators
pub mod predicate; // Fruit filter
pub mod record;    // Fixed-shape record
pub mod report;    // Output lines and driver runs
pub mod store;     // Ordered record store

// Re-exports for convenience
pub use error::IterError;
pub use iter::{for_each_fruit, try_for_each_fruit, FruitIterator};
pub use predicate::is_fruit;
pub use record::Record;
pub use report::{format_line, Style};
pub use store::RecordStore;
