//! The two iteration styles over a record store
//!
//! External: the consumer owns a cursor object and pulls records.
//! Internal: the traversal owns the loop and pushes records into a
//! caller-supplied action.
//!
//! Both select records with [`crate::predicate::is_fruit`] and report
//! matches in store order.

mod external;
mod internal;

pub use external::FruitIterator;
pub use internal::{for_each_fruit, try_for_each_fruit};
