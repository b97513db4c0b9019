//! # `ordered_collection`
//!
//! A generic ordered collection whose elements can be visited in six
//! different orders, each computed on demand from a snapshot.
//!
//! ## Overview
//!
//! [`OrderedCollection`](collection::OrderedCollection) stores elements in
//! insertion order, allows duplicates, and removes by value. Every traversal
//! request copies the current elements into an immutable buffer and arranges
//! them according to a [`TraversalOrder`](collection::TraversalOrder):
//!
//! - **Insertion**: the order in which elements were appended
//! - **Reverse**: insertion order, backwards
//! - **Ascending** / **Descending**: stable sorts
//! - **Side-cross**: smallest, largest, second smallest, second largest, ...
//! - **Middle-out**: the sorted middle first, then outward
//!
//! Later mutations of the collection never affect a traversal that already
//! exists.
//!
//! ## Feature Flags
//!
//! - `arc`: Share traversal buffers through `Arc` instead of `Rc`, making
//!   traversals and cursors `Send + Sync`
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordered_collection::prelude::*;
//!
//! let collection: OrderedCollection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
//!
//! let side_cross: Vec<i32> = collection.side_cross_order().into_iter().collect();
//! assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
//!
//! let middle_out: Vec<i32> = collection.middle_out_order().into_iter().collect();
//! assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordered_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
