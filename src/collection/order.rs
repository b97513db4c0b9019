//! The six traversal orders and their index permutations.
//!
//! Every order is described in two steps:
//!
//! 1. A *basis*: the snapshot as-is (insertion, reverse), or the snapshot
//!    stably sorted in ascending or descending direction.
//! 2. A *permutation*: the sequence of basis indices to visit, which depends
//!    only on the number of elements.
//!
//! Keeping the permutation free of element access lets it be reasoned about
//! (and tested) independently of `T`.
//!
//! # Examples
//!
//! ```rust
//! use ordered_collection::collection::TraversalOrder;
//!
//! assert_eq!(TraversalOrder::SideCross.permutation(5), vec![0, 4, 1, 3, 2]);
//! assert_eq!(TraversalOrder::MiddleOut.permutation(5), vec![2, 4, 0, 3, 1]);
//! assert_eq!(TraversalOrder::Reverse.permutation(3), vec![2, 1, 0]);
//! ```

use std::fmt;

/// The order in which a traversal visits a snapshot of the collection.
///
/// # Examples
///
/// ```rust
/// use ordered_collection::collection::{OrderedCollection, TraversalOrder};
///
/// let collection: OrderedCollection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
///
/// for order in TraversalOrder::ALL {
///     assert_eq!(collection.traverse(order).len(), 5);
/// }
///
/// let side_cross: Vec<i32> = collection
///     .traverse(TraversalOrder::SideCross)
///     .into_iter()
///     .collect();
/// assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TraversalOrder {
    /// The order in which elements were appended.
    Insertion,
    /// Insertion order, backwards.
    Reverse,
    /// Stable ascending sort.
    Ascending,
    /// Stable descending sort.
    Descending,
    /// Smallest, largest, second smallest, second largest, and so on.
    SideCross,
    /// The sorted middle element first, then alternately the outermost
    /// remaining right and left elements.
    MiddleOut,
}

/// The arrangement a permutation indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Snapshot,
    SortedAscending,
    SortedDescending,
}

impl TraversalOrder {
    /// All traversal orders, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Insertion,
        Self::Reverse,
        Self::Ascending,
        Self::Descending,
        Self::SideCross,
        Self::MiddleOut,
    ];

    /// Returns the kebab-case name of this order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::TraversalOrder;
    ///
    /// assert_eq!(TraversalOrder::MiddleOut.name(), "middle-out");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Reverse => "reverse",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::SideCross => "side-cross",
            Self::MiddleOut => "middle-out",
        }
    }

    /// Returns `true` if this order needs the elements to be sorted.
    ///
    /// Only [`Insertion`](Self::Insertion) and [`Reverse`](Self::Reverse)
    /// work without a total order on the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::TraversalOrder;
    ///
    /// assert!(!TraversalOrder::Reverse.requires_ordering());
    /// assert!(TraversalOrder::SideCross.requires_ordering());
    /// ```
    #[must_use]
    pub const fn requires_ordering(self) -> bool {
        !matches!(self, Self::Insertion | Self::Reverse)
    }

    pub(crate) const fn basis(self) -> Basis {
        match self {
            Self::Insertion | Self::Reverse => Basis::Snapshot,
            Self::Descending => Basis::SortedDescending,
            Self::Ascending | Self::SideCross | Self::MiddleOut => Basis::SortedAscending,
        }
    }

    /// Returns the sequence of basis indices this order visits for a
    /// snapshot of `length` elements.
    ///
    /// The basis is the snapshot itself for [`Insertion`](Self::Insertion)
    /// and [`Reverse`](Self::Reverse), the snapshot stably sorted descending
    /// for [`Descending`](Self::Descending), and the snapshot stably sorted
    /// ascending otherwise. The result is always a permutation of
    /// `0..length`; for `length == 0` it is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_collection::collection::TraversalOrder;
    ///
    /// assert_eq!(TraversalOrder::Ascending.permutation(3), vec![0, 1, 2]);
    /// assert_eq!(TraversalOrder::SideCross.permutation(4), vec![0, 3, 1, 2]);
    /// assert_eq!(TraversalOrder::MiddleOut.permutation(4), vec![2, 3, 0, 1]);
    /// assert!(TraversalOrder::MiddleOut.permutation(0).is_empty());
    /// ```
    #[must_use]
    pub fn permutation(self, length: usize) -> Vec<usize> {
        match self {
            Self::Insertion | Self::Ascending | Self::Descending => (0..length).collect(),
            Self::Reverse => (0..length).rev().collect(),
            Self::SideCross => side_cross_permutation(length),
            Self::MiddleOut => middle_out_permutation(length),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Alternates between the two ends of the basis, moving inward. When both
/// ends meet on a single element it is emitted once.
fn side_cross_permutation(length: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity(length);
    if length == 0 {
        return indices;
    }

    let mut left = 0;
    let mut right = length - 1;
    while left < right {
        indices.push(left);
        indices.push(right);
        left += 1;
        right -= 1;
    }
    if left == right {
        indices.push(left);
    }
    indices
}

/// Starts at `length / 2`, then for each offset emits the right-outer index
/// `length - offset` (while `mid + offset` is in range) followed by the
/// left-outer index `offset - 1` (while `mid - offset` is non-negative).
///
/// The right side is counted from the end rather than from `mid`, so the
/// two sides do not expand symmetrically. This matches the established
/// middle-out sequence: `[1, 2, 6, 7, 15]` is visited as `6, 15, 1, 7, 2`.
fn middle_out_permutation(length: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity(length);
    if length == 0 {
        return indices;
    }

    let middle = length / 2;
    indices.push(middle);

    let mut offset = 1;
    while offset <= middle || middle + offset < length {
        if middle + offset < length {
            indices.push(length - offset);
        }
        if offset <= middle {
            indices.push(offset - 1);
        }
        offset += 1;
    }
    indices
}

// =============================================================================
// Tests
// =============================================================================
