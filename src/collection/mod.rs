//! The ordered collection and its traversals.
//!
//! This module provides:
//!
//! - [`OrderedCollection`]: Insertion-ordered storage with removal by value
//! - [`TraversalOrder`]: The six orders a collection can be visited in
//! - [`Traversal`]: An immutable, shareable snapshot arranged in one order
//! - [`Cursor`]: A position inside a traversal, with explicit dereference
//!   and advance
//!
//! # Snapshots
//!
//! Every traversal producer copies the current elements into a fresh buffer
//! before arranging them. The buffer is reference counted; cursors and
//! iterators keep it alive, and it is freed when the last of them is dropped.
//!
//! # Examples
//!
//! ## Producing traversals
//!
//! ```rust
//! use ordered_collection::collection::OrderedCollection;
//!
//! let mut collection = OrderedCollection::new();
//! collection.append(3);
//! collection.append(1);
//! collection.append(2);
//!
//! let traversal = collection.ascending_order();
//! let ascending: Vec<&i32> = traversal.iter().collect();
//! assert_eq!(ascending, vec![&1, &2, &3]);
//!
//! let reverse: Vec<i32> = collection.reverse_order().into_iter().collect();
//! assert_eq!(reverse, vec![2, 1, 3]);
//! ```
//!
//! ## Cursors
//!
//! ```rust
//! use ordered_collection::collection::OrderedCollection;
//!
//! let collection: OrderedCollection<i32> = [5, 10].into_iter().collect();
//! let traversal = collection.descending_order();
//!
//! let mut cursor = traversal.begin();
//! assert_eq!(cursor.current(), Ok(&10));
//! cursor.advance();
//! assert_eq!(cursor.current(), Ok(&5));
//! cursor.advance();
//! assert_eq!(cursor, traversal.end());
//! assert!(cursor.current().is_err());
//! ```
//!
//! ## Snapshot isolation
//!
//! ```rust
//! use ordered_collection::collection::OrderedCollection;
//!
//! let mut collection: OrderedCollection<i32> = [1, 2, 3].into_iter().collect();
//! let traversal = collection.insertion_order();
//!
//! collection.remove(&2).unwrap();
//! collection.append(4);
//!
//! assert_eq!(traversal.as_slice(), &[1, 2, 3]);
//! assert_eq!(collection.as_slice(), &[1, 3, 4]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type for snapshot buffers.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod order;
mod ordered;
mod traversal;

pub use error::CollectionError;
pub use error::NotFoundError;
pub use error::OutOfBoundsError;
pub use order::TraversalOrder;
pub use ordered::OrderedCollection;
pub use ordered::OrderedCollectionIntoIterator;
pub use ordered::OrderedCollectionIterator;
pub use traversal::Cursor;
pub use traversal::Traversal;
pub use traversal::TraversalIntoIterator;
pub use traversal::TraversalIterator;

// =============================================================================
// Tests
// =============================================================================
