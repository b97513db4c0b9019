//! Error types for the ordered collection.
//!
//! Removal of an absent value yields [`NotFoundError`]; dereferencing a
//! cursor at or past the end of its traversal yields [`OutOfBoundsError`].
//! [`CollectionError`] unifies both so callers can propagate either with `?`.

use std::fmt;

/// Returned by [`OrderedCollection::remove`](super::OrderedCollection::remove)
/// when no element equals the requested value.
///
/// The collection is left unchanged when this error is returned.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{NotFoundError, OrderedCollection};
///
/// let mut collection: OrderedCollection<i32> = [1, 2].into_iter().collect();
/// assert_eq!(collection.remove(&999), Err(NotFoundError));
/// assert_eq!(collection.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotFoundError;

impl fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "OrderedCollection: element not found")
    }
}

impl std::error::Error for NotFoundError {}

/// Returned when a [`Cursor`](super::Cursor) is dereferenced at or past the
/// end of its traversal.
///
/// This indicates a mistake in traversal usage rather than a recoverable
/// runtime condition. Dereferencing the begin cursor of an empty traversal
/// produces this error with `position == length == 0`.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{OrderedCollection, OutOfBoundsError};
///
/// let collection: OrderedCollection<i32> = OrderedCollection::new();
/// let traversal = collection.ascending_order();
///
/// assert_eq!(
///     traversal.begin().current(),
///     Err(OutOfBoundsError { position: 0, length: 0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoundsError {
    /// The cursor position that was dereferenced.
    pub position: usize,
    /// The number of elements in the traversal.
    pub length: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Cursor: position {} is out of bounds for a traversal of length {}",
            self.position, self.length
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

/// Represents every error the ordered collection can produce.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{CollectionError, OrderedCollection};
///
/// fn remove_then_peek(
///     collection: &mut OrderedCollection<i32>,
///     value: i32,
/// ) -> Result<i32, CollectionError> {
///     collection.remove(&value)?;
///     let traversal = collection.ascending_order();
///     let smallest = *traversal.begin().current()?;
///     Ok(smallest)
/// }
///
/// let mut collection: OrderedCollection<i32> = [4, 2, 8].into_iter().collect();
/// assert_eq!(remove_then_peek(&mut collection, 2), Ok(4));
/// assert!(matches!(
///     remove_then_peek(&mut collection, 2),
///     Err(CollectionError::NotFound(_))
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// A removal target was absent.
    NotFound(NotFoundError),
    /// A cursor was dereferenced at or past the end.
    OutOfBounds(OutOfBoundsError),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(error) => write!(formatter, "{error}"),
            Self::OutOfBounds(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(error) => Some(error),
            Self::OutOfBounds(error) => Some(error),
        }
    }
}

impl From<NotFoundError> for CollectionError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}

impl From<OutOfBoundsError> for CollectionError {
    fn from(error: OutOfBoundsError) -> Self {
        Self::OutOfBounds(error)
    }
}
