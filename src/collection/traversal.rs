//! Materialized traversals and the cursors that walk them.
//!
//! A [`Traversal`] owns one reference-counted, immutable buffer holding a
//! snapshot of the collection arranged in a [`TraversalOrder`]. Cursors and
//! iterators created from it share that buffer, so they stay valid after the
//! traversal handle (or the collection) is dropped or mutated.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `begin` / `end`    | O(1)       |
//! | `Cursor::current`  | O(1)       |
//! | `Cursor::advance`  | O(1)       |
//! | `iter`             | O(1) + O(n)|
//! | `clone`            | O(1)       |

use super::ReferenceCounter;
use super::error::OutOfBoundsError;
use super::order::TraversalOrder;
use std::fmt;
use std::iter::FusedIterator;

/// An immutable snapshot of a collection arranged in one traversal order.
///
/// Cloning a `Traversal` is O(1): the clone shares the same buffer. The
/// sequence can be walked any number of times, either through [`iter`]
/// or with explicit [`Cursor`]s from [`begin`] and [`end`].
///
/// [`iter`]: Traversal::iter
/// [`begin`]: Traversal::begin
/// [`end`]: Traversal::end
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{OrderedCollection, TraversalOrder};
///
/// let collection: OrderedCollection<i32> = [3, 1, 2].into_iter().collect();
/// let traversal = collection.ascending_order();
///
/// assert_eq!(traversal.order(), TraversalOrder::Ascending);
/// assert_eq!(traversal.as_slice(), &[1, 2, 3]);
///
/// // Restartable
/// let first: Vec<&i32> = traversal.iter().collect();
/// let second: Vec<&i32> = traversal.iter().collect();
/// assert_eq!(first, second);
/// ```
pub struct Traversal<T> {
    order: TraversalOrder,
    buffer: ReferenceCounter<[T]>,
}

impl<T> Traversal<T> {
    /// Builds a traversal by visiting `basis` in the index order given by
    /// [`TraversalOrder::permutation`].
    ///
    /// `basis` must already be arranged as the order expects (sorted for the
    /// sorting orders).
    pub(crate) fn from_basis(order: TraversalOrder, basis: Vec<T>) -> Self {
        let length = basis.len();
        let permutation = order.permutation(length);

        let mut slots: Vec<Option<T>> = basis.into_iter().map(Some).collect();
        let arranged: Vec<T> = permutation
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();
        debug_assert_eq!(arranged.len(), length);

        log::trace!("materialized {order} traversal over {length} elements");

        Self {
            order,
            buffer: ReferenceCounter::from(arranged),
        }
    }

    /// Returns the order this traversal was arranged in.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns the number of elements in the traversal.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the traversal has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the arranged elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a cursor positioned at the first element.
    ///
    /// For an empty traversal the returned cursor equals [`end`](Self::end).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let empty: OrderedCollection<i32> = OrderedCollection::new();
    /// let traversal = empty.middle_out_order();
    /// assert_eq!(traversal.begin(), traversal.end());
    /// ```
    #[must_use]
    pub fn begin(&self) -> Cursor<T> {
        Cursor {
            buffer: ReferenceCounter::clone(&self.buffer),
            position: 0,
        }
    }

    /// Returns the end sentinel cursor, positioned one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<T> {
        Cursor {
            buffer: ReferenceCounter::clone(&self.buffer),
            position: self.buffer.len(),
        }
    }

    /// Returns an iterator over references to the arranged elements.
    ///
    /// The references borrow this traversal, so it must be bound to a
    /// variable that outlives them. To collect from a temporary traversal,
    /// use [`into_iter`](IntoIterator::into_iter) for owned elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let traversal = collection.reverse_order();
    /// let reversed: Vec<&i32> = traversal.iter().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    ///
    /// let owned: Vec<i32> = collection.reverse_order().into_iter().collect();
    /// assert_eq!(owned, vec![3, 2, 1]);
    /// ```
    ///
    /// Borrowing from a traversal that is dropped at the end of the
    /// statement does not compile:
    ///
    /// ```compile_fail
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let reversed: Vec<&i32> = collection.reverse_order().iter().collect();
    /// assert_eq!(reversed.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> TraversalIterator<'_, T> {
        TraversalIterator {
            inner: self.buffer.iter(),
        }
    }
}

impl<T> Clone for Traversal<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            buffer: ReferenceCounter::clone(&self.buffer),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Traversal<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("order", &self.order)
            .field("elements", &&*self.buffer)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Traversal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && *self.buffer == *other.buffer
    }
}

impl<T: Eq> Eq for Traversal<T> {}

// =============================================================================
// Cursor
// =============================================================================

/// A position inside a [`Traversal`].
///
/// A cursor supports the three primitive operations of a manual walk:
/// [`has_more`](Self::has_more), [`current`](Self::current) and
/// [`advance`](Self::advance). Advancing from the last element moves the
/// cursor onto the end sentinel; advancing further leaves it there.
///
/// Two cursors are equal when they walk the same snapshot buffer and sit at
/// the same position.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::OrderedCollection;
///
/// let collection: OrderedCollection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let traversal = collection.side_cross_order();
///
/// let mut visited = Vec::new();
/// let mut cursor = traversal.begin();
/// while cursor != traversal.end() {
///     visited.push(*cursor.current().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(visited, vec![1, 15, 2, 7, 6]);
/// ```
pub struct Cursor<T> {
    buffer: ReferenceCounter<[T]>,
    position: usize,
}

impl<T> Cursor<T> {
    /// Returns the index of the cursor within its traversal.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the cursor points at an element.
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Returns `true` if the cursor sits on the end sentinel.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        !self.has_more()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] when the cursor is at the end sentinel,
    /// which includes the begin cursor of an empty traversal.
    pub fn current(&self) -> Result<&T, OutOfBoundsError> {
        self.buffer.get(self.position).ok_or(OutOfBoundsError {
            position: self.position,
            length: self.buffer.len(),
        })
    }

    /// Moves the cursor to the next element, or onto the end sentinel after
    /// the last one.
    pub fn advance(&mut self) -> &mut Self {
        if self.has_more() {
            self.position += 1;
        }
        self
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: ReferenceCounter::clone(&self.buffer),
            position: self.position,
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.buffer, &other.buffer) && self.position == other.position
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("position", &self.position)
            .field("length", &self.buffer.len())
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over a [`Traversal`].
pub struct TraversalIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for TraversalIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TraversalIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for TraversalIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for TraversalIterator<'_, T> {}

/// An owning iterator over a [`Traversal`].
///
/// The buffer may be shared with other traversal handles or cursors, so
/// elements are cloned out of it.
pub struct TraversalIntoIterator<T> {
    buffer: ReferenceCounter<[T]>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for TraversalIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.buffer[self.front].clone();
        self.front += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for TraversalIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for TraversalIntoIterator<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T: Clone> FusedIterator for TraversalIntoIterator<T> {}

impl<T: Clone> IntoIterator for Traversal<T> {
    type Item = T;
    type IntoIter = TraversalIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.buffer.len();
        TraversalIntoIterator {
            buffer: self.buffer,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Traversal<T> {
    type Item = &'a T;
    type IntoIter = TraversalIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Traversal<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
mod thread_safety {
    use super::{Cursor, Traversal, TraversalIntoIterator};

    static_assertions::assert_impl_all!(Traversal<i32>: Send, Sync);
    static_assertions::assert_impl_all!(Cursor<i32>: Send, Sync);
    static_assertions::assert_impl_all!(TraversalIntoIterator<String>: Send, Sync);
}

#[cfg(not(feature = "arc"))]
mod thread_safety {
    use super::{Cursor, Traversal};

    static_assertions::assert_not_impl_any!(Traversal<i32>: Send, Sync);
    static_assertions::assert_not_impl_any!(Cursor<i32>: Send, Sync);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn traversal_of(order: TraversalOrder, basis: Vec<i32>) -> Traversal<i32> {
        Traversal::from_basis(order, basis)
    }

    #[rstest]
    #[case(TraversalOrder::Insertion, vec![1, 2, 3, 4, 5])]
    #[case(TraversalOrder::Reverse, vec![5, 4, 3, 2, 1])]
    #[case(TraversalOrder::Ascending, vec![1, 2, 3, 4, 5])]
    #[case(TraversalOrder::SideCross, vec![1, 5, 2, 4, 3])]
    #[case(TraversalOrder::MiddleOut, vec![3, 5, 1, 4, 2])]
    fn test_from_basis_applies_permutation(
        #[case] order: TraversalOrder,
        #[case] expected: Vec<i32>,
    ) {
        let traversal = traversal_of(order, vec![1, 2, 3, 4, 5]);
        assert_eq!(traversal.as_slice(), expected.as_slice());
        assert_eq!(traversal.order(), order);
    }

    #[rstest]
    fn test_cursor_walk_reaches_end() {
        let traversal = traversal_of(TraversalOrder::Insertion, vec![10, 20]);
        let mut cursor = traversal.begin();

        assert!(cursor.has_more());
        assert_eq!(cursor.current(), Ok(&10));
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Ok(&20));
        cursor.advance();

        assert!(cursor.is_end());
        assert_eq!(cursor, traversal.end());
        assert_eq!(
            cursor.current(),
            Err(OutOfBoundsError {
                position: 2,
                length: 2
            })
        );
    }

    #[rstest]
    fn test_cursor_advance_saturates_at_end() {
        let traversal = traversal_of(TraversalOrder::Insertion, vec![1]);
        let mut cursor = traversal.end();
        cursor.advance().advance();
        assert_eq!(cursor, traversal.end());
        assert_eq!(cursor.position(), 1);
    }

    #[rstest]
    fn test_cursors_from_distinct_snapshots_are_not_equal() {
        let first = traversal_of(TraversalOrder::Insertion, vec![1, 2]);
        let second = traversal_of(TraversalOrder::Insertion, vec![1, 2]);
        assert_ne!(first.begin(), second.begin());
        assert_eq!(first.begin(), first.begin());
    }

    #[rstest]
    fn test_cursor_outlives_traversal_handle() {
        let traversal = traversal_of(TraversalOrder::Reverse, vec![1, 2, 3]);
        let cursor = traversal.begin();
        drop(traversal);
        assert_eq!(cursor.current(), Ok(&3));
    }

    #[rstest]
    fn test_buffer_freed_with_last_handle() {
        let traversal = traversal_of(TraversalOrder::Insertion, vec![1, 2, 3]);
        let cursor = traversal.begin();
        let end = traversal.end();
        assert_eq!(ReferenceCounter::strong_count(&traversal.buffer), 3);
        drop(cursor);
        drop(end);
        assert_eq!(ReferenceCounter::strong_count(&traversal.buffer), 1);
    }

    #[rstest]
    fn test_into_iterator_double_ended() {
        let traversal = traversal_of(TraversalOrder::Insertion, vec![1, 2, 3, 4]);
        let mut iterator = traversal.into_iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.next_back(), Some(4));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_borrowing_iterator_exact_size() {
        let traversal = traversal_of(TraversalOrder::MiddleOut, vec![1, 2, 3]);
        let iterator = traversal.iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.rev().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_empty_traversal() {
        let traversal = traversal_of(TraversalOrder::SideCross, Vec::new());
        assert!(traversal.is_empty());
        assert_eq!(traversal.begin(), traversal.end());
        assert_eq!(traversal.iter().next(), None);
        assert_eq!(traversal.into_iter().next(), None);
    }

    #[rstest]
    fn test_debug_format() {
        let traversal = traversal_of(TraversalOrder::Reverse, vec![1, 2]);
        assert_eq!(
            format!("{traversal:?}"),
            "Traversal { order: Reverse, elements: [2, 1] }"
        );
        assert_eq!(
            format!("{:?}", traversal.end()),
            "Cursor { position: 2, length: 2 }"
        );
    }
}
