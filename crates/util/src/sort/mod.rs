//! Sorting utilities.
//!
//! Sorting here works against an index-based interface instead of a slice, so
//! wrapper collections can be ordered in place without exposing their storage.

mod insertion;

pub use insertion::{insertion_sort, is_sorted};

/// A collection that can be sorted by index.
///
/// `less` and `swap` take positions, not values. Indices outside `0..len()` are
/// a caller error and may panic.
pub trait Sortable {
    /// Number of elements in the collection.
    fn len(&self) -> usize;

    /// Whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Whether the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}
