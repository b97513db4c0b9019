//! Insertion-ordered collection with on-demand traversals.
//!
//! This module provides [`OrderedCollection`], a growable sequence that keeps
//! elements in the order they were appended, allows duplicates, and removes
//! by value. Its traversal producers each take a snapshot of the elements
//! and arrange it in one of the six [`TraversalOrder`]s.
//!
//! # Time Complexity
//!
//! | Operation                                  | Complexity    |
//! |--------------------------------------------|---------------|
//! | `append`                                   | O(1) amortized|
//! | `remove`                                   | O(n)          |
//! | `contains`                                 | O(n)          |
//! | `len` / `is_empty`                         | O(1)          |
//! | `snapshot`                                 | O(n)          |
//! | `insertion_order` / `reverse_order`        | O(n)          |
//! | `ascending_order` / `descending_order`     | O(n log n)    |
//! | `side_cross_order` / `middle_out_order`    | O(n log n)    |
//!
//! # Examples
//!
//! ```rust
//! use ordered_collection::collection::OrderedCollection;
//!
//! let mut collection = OrderedCollection::new();
//! for value in [7, 15, 6, 1, 2] {
//!     collection.append(value);
//! }
//!
//! let traversal = collection.middle_out_order();
//! let middle_out: Vec<&i32> = traversal.iter().collect();
//! assert_eq!(middle_out, vec![&6, &15, &1, &7, &2]);
//!
//! assert_eq!(collection.remove(&6), Ok(6));
//! assert_eq!(collection.as_slice(), &[7, 15, 1, 2]);
//! ```

use super::error::NotFoundError;
use super::order::{Basis, TraversalOrder};
use super::traversal::Traversal;
use std::fmt;

/// A generic sequence that preserves insertion order and can be traversed
/// in six orders.
///
/// Element requirements are expressed per operation:
///
/// - `PartialEq` for [`remove`](Self::remove) and [`contains`](Self::contains)
/// - `Clone` for anything that takes a snapshot
/// - `Ord` for the sorting traversals
///
/// The collection itself provides no synchronization. Traversals are
/// independent of it once produced.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::OrderedCollection;
///
/// let mut collection = OrderedCollection::new();
/// collection.append(5);
/// collection.append(10);
/// collection.append(15);
/// assert_eq!(collection.len(), 3);
///
/// collection.remove(&10).unwrap();
/// assert_eq!(collection.len(), 2);
/// assert!(collection.remove(&999).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedCollection<T> {
    elements: Vec<T>,
}

impl<T> OrderedCollection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = OrderedCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty collection with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` after the last element.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    #[inline]
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Returns the number of elements in the collection.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the live elements in insertion order.
    ///
    /// Unlike [`snapshot`](Self::snapshot), this borrows the collection.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the live elements in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedCollectionIterator<'_, T> {
        OrderedCollectionIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: PartialEq> OrderedCollection<T> {
    /// Returns `true` if any element equals `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Later elements shift down by one; the relative order of all remaining
    /// elements is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element equals `value`. The collection
    /// is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::{NotFoundError, OrderedCollection};
    ///
    /// let mut collection: OrderedCollection<i32> = [1, 2, 1, 3].into_iter().collect();
    ///
    /// // Only the first match is removed
    /// assert_eq!(collection.remove(&1), Ok(1));
    /// assert_eq!(collection.as_slice(), &[2, 1, 3]);
    ///
    /// assert_eq!(collection.remove(&42), Err(NotFoundError));
    /// assert_eq!(collection.as_slice(), &[2, 1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T, NotFoundError> {
        let Some(position) = self.elements.iter().position(|element| element == value) else {
            log::debug!(
                "remove missed: no match among {} elements",
                self.elements.len()
            );
            return Err(NotFoundError);
        };
        Ok(self.elements.remove(position))
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Returns an immutable copy of the current elements in insertion order.
    ///
    /// The returned buffer is independent of the collection: later appends
    /// and removals do not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let mut collection: OrderedCollection<i32> = [5, 10, 15].into_iter().collect();
    /// let snapshot = collection.snapshot();
    /// collection.append(20);
    ///
    /// assert_eq!(&*snapshot, &[5, 10, 15]);
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Box<[T]> {
        self.elements.as_slice().into()
    }

    /// Returns a traversal in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let ordered: Vec<i32> = collection.insertion_order().into_iter().collect();
    /// assert_eq!(ordered, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn insertion_order(&self) -> Traversal<T> {
        Traversal::from_basis(TraversalOrder::Insertion, self.elements.clone())
    }

    /// Returns a traversal in reverse insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let reversed: Vec<i32> = collection.reverse_order().into_iter().collect();
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse_order(&self) -> Traversal<T> {
        Traversal::from_basis(TraversalOrder::Reverse, self.elements.clone())
    }
}

impl<T: Clone + Ord> OrderedCollection<T> {
    /// Returns a traversal in the given order.
    ///
    /// Equivalent to calling the matching producer, e.g.
    /// `traverse(TraversalOrder::SideCross)` is `side_cross_order()`.
    ///
    /// # Complexity
    ///
    /// O(n) for insertion and reverse, O(n log n) otherwise
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<T> {
        let mut basis = self.elements.clone();
        match order.basis() {
            Basis::Snapshot => {}
            Basis::SortedAscending => basis.sort(),
            Basis::SortedDescending => basis.sort_by(|left, right| right.cmp(left)),
        }
        Traversal::from_basis(order, basis)
    }

    /// Returns a traversal in ascending order.
    ///
    /// The sort is stable: equal elements keep their insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [3, 1, 2].into_iter().collect();
    /// let ascending: Vec<i32> = collection.ascending_order().into_iter().collect();
    /// assert_eq!(ascending, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn ascending_order(&self) -> Traversal<T> {
        self.traverse(TraversalOrder::Ascending)
    }

    /// Returns a traversal in descending order.
    ///
    /// The sort is stable: equal elements keep their insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [3, 1, 2].into_iter().collect();
    /// let descending: Vec<i32> = collection.descending_order().into_iter().collect();
    /// assert_eq!(descending, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn descending_order(&self) -> Traversal<T> {
        self.traverse(TraversalOrder::Descending)
    }

    /// Returns a traversal that alternates between the smallest and largest
    /// remaining elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let side_cross: Vec<i32> = collection.side_cross_order().into_iter().collect();
    /// assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
    /// ```
    #[must_use]
    pub fn side_cross_order(&self) -> Traversal<T> {
        self.traverse(TraversalOrder::SideCross)
    }

    /// Returns a traversal that starts at the sorted middle and works
    /// outward, right side first.
    ///
    /// See [`TraversalOrder::permutation`] for the exact index sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::OrderedCollection;
    ///
    /// let collection: OrderedCollection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let middle_out: Vec<i32> = collection.middle_out_order().into_iter().collect();
    /// assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
    /// ```
    #[must_use]
    pub fn middle_out_order(&self) -> Traversal<T> {
        self.traverse(TraversalOrder::MiddleOut)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the live elements of an [`OrderedCollection`].
pub struct OrderedCollectionIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedCollectionIterator<'a, T> {
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

impl<T> DoubleEndedIterator for OrderedCollectionIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedCollectionIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of an [`OrderedCollection`].
pub struct OrderedCollectionIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedCollectionIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedCollectionIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedCollectionIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.elements.iter())
            .finish()
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = OrderedCollectionIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedCollectionIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = OrderedCollectionIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedCollection<T> {
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

#[cfg(feature = "serde")]
struct OrderedCollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedCollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedCollectionVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = OrderedCollection<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut collection = OrderedCollection::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            collection.append(element);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedCollection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedCollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collection_of(values: &[i32]) -> OrderedCollection<i32> {
        values.iter().copied().collect()
    }

    /// Equal keys distinguished by a tag that does not take part in ordering.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tags(traversal: &Traversal<Tagged>) -> String {
        traversal.iter().map(|element| element.tag).collect()
    }

    #[rstest]
    fn test_append_and_len() {
        let mut collection = OrderedCollection::new();
        assert_eq!(collection.len(), 0);
        collection.append(5);
        collection.append(10);
        collection.append(15);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.as_slice(), &[5, 10, 15]);
    }

    #[rstest]
    fn test_remove_first_match_only() {
        let mut collection = collection_of(&[4, 7, 4, 9]);
        assert_eq!(collection.remove(&4), Ok(4));
        assert_eq!(collection.as_slice(), &[7, 4, 9]);
    }

    #[rstest]
    fn test_remove_missing_leaves_collection_unchanged() {
        let mut collection = collection_of(&[5, 10, 15]);
        assert_eq!(collection.remove(&999), Err(NotFoundError));
        assert_eq!(collection.as_slice(), &[5, 10, 15]);
    }

    #[rstest]
    fn test_remove_from_empty() {
        let mut collection: OrderedCollection<i32> = OrderedCollection::new();
        assert_eq!(collection.remove(&0), Err(NotFoundError));
        assert!(collection.is_empty());
    }

    #[rstest]
    fn test_contains() {
        let collection = collection_of(&[1, 2]);
        assert!(collection.contains(&2));
        assert!(!collection.contains(&3));
    }

    #[rstest]
    fn test_snapshot_is_independent() {
        let mut collection = collection_of(&[5, 10, 15]);
        let snapshot = collection.snapshot();
        collection.remove(&10).unwrap();
        collection.append(20);
        assert_eq!(&*snapshot, &[5, 10, 15]);
    }

    #[rstest]
    #[case(TraversalOrder::Insertion, vec![7, 15, 6, 1, 2])]
    #[case(TraversalOrder::Reverse, vec![2, 1, 6, 15, 7])]
    #[case(TraversalOrder::Ascending, vec![1, 2, 6, 7, 15])]
    #[case(TraversalOrder::Descending, vec![15, 7, 6, 2, 1])]
    #[case(TraversalOrder::SideCross, vec![1, 15, 2, 7, 6])]
    #[case(TraversalOrder::MiddleOut, vec![6, 15, 1, 7, 2])]
    fn test_traverse_each_order(#[case] order: TraversalOrder, #[case] expected: Vec<i32>) {
        let collection = collection_of(&[7, 15, 6, 1, 2]);
        assert_eq!(collection.traverse(order).as_slice(), expected.as_slice());
    }

    #[rstest]
    fn test_named_producers_match_traverse() {
        let collection = collection_of(&[3, 9, 1, 4, 1, 5]);
        assert_eq!(
            collection.insertion_order(),
            collection.traverse(TraversalOrder::Insertion)
        );
        assert_eq!(
            collection.reverse_order(),
            collection.traverse(TraversalOrder::Reverse)
        );
        assert_eq!(
            collection.ascending_order(),
            collection.traverse(TraversalOrder::Ascending)
        );
        assert_eq!(
            collection.descending_order(),
            collection.traverse(TraversalOrder::Descending)
        );
        assert_eq!(
            collection.side_cross_order(),
            collection.traverse(TraversalOrder::SideCross)
        );
        assert_eq!(
            collection.middle_out_order(),
            collection.traverse(TraversalOrder::MiddleOut)
        );
    }

    #[rstest]
    fn test_sorting_orders_are_stable() {
        let collection: OrderedCollection<Tagged> = [
            Tagged { key: 2, tag: 'a' },
            Tagged { key: 1, tag: 'b' },
            Tagged { key: 2, tag: 'c' },
            Tagged { key: 1, tag: 'd' },
        ]
        .into_iter()
        .collect();

        assert_eq!(tags(&collection.ascending_order()), "bdac");
        assert_eq!(tags(&collection.descending_order()), "acbd");
        // sorted ascending: b d a c
        assert_eq!(tags(&collection.side_cross_order()), "bcda");
        assert_eq!(tags(&collection.middle_out_order()), "acbd");
    }

    #[rstest]
    fn test_empty_collection_traversals() {
        let collection: OrderedCollection<i32> = OrderedCollection::new();
        for order in TraversalOrder::ALL {
            let traversal = collection.traverse(order);
            assert!(traversal.is_empty(), "{order}");
            assert_eq!(traversal.begin(), traversal.end(), "{order}");
        }
    }

    #[rstest]
    fn test_traversal_survives_mutation() {
        let mut collection = collection_of(&[3, 1, 2]);
        let traversal = collection.ascending_order();
        collection.remove(&1).unwrap();
        collection.append(0);
        assert_eq!(traversal.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_extend_and_into_iter() {
        let mut collection = collection_of(&[1]);
        collection.extend([2, 3]);
        assert_eq!(
            collection.clone().into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!((&collection).into_iter().rev().count(), 3);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", collection_of(&[1, 2])), "[1, 2]");
    }
}
