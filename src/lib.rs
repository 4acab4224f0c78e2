#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A hash map implemented over the chained HashTable.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface with configurable hashers and first-write-wins
/// insertion.
pub mod hash_map;

/// The separate-chaining hash table core.
///
/// This module provides the value-generic `HashTable` that owns the bucket
/// array, enforces the load-factor invariant through rebuilding, and exposes
/// the cursor protocol over the (bucket, slot) index space.
pub mod hash_table;

/// A hash set implemented over the chained HashTable.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_map::KeyNotFound;
pub use hash_set::HashSet;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used by [`HashMap`] and [`HashSet`] when none
        /// is supplied.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used by [`HashMap`] and [`HashSet`] when none
        /// is supplied.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Placeholder hasher builder used when neither the `foldhash` nor
        /// the `std` feature is enabled.
        ///
        /// This type is uninhabited; construct maps and sets through their
        /// `with_hasher` constructors instead.
        pub enum DefaultHashBuilder {}
    }
}
