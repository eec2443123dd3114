use crate::sort::Sortable;

/// Insertion sort driven only through the [`Sortable`] interface.
///
/// The collection is never inspected directly: elements are compared with
/// [`Sortable::less`] and moved with [`Sortable::swap`], so any type exposing
/// those three operations can be sorted in place.
///
/// # Performance
///
/// - Time complexity: O(n²) worst case, O(n) best case (already sorted)
/// - Space complexity: O(1) - sorts in place
/// - Stable: equal elements keep their relative order
///
/// # Examples
///
/// ```
/// use ormtypes_util::sort::insertion_sort;
///
/// let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// insertion_sort(arr.as_mut_slice());
/// assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn insertion_sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    for i in 1..len {
        let mut j = i;
        while j > 0 && data.less(j, j - 1) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Report whether `data` is sorted according to [`Sortable::less`].
///
/// # Examples
///
/// ```
/// use ormtypes_util::sort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3][..]));
/// assert!(!is_sorted(&["b", "a"][..]));
/// ```
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sortable that counts swaps, to check the sort only moves what it must.
    struct Counting {
        items: Vec<u32>,
        swaps: usize,
    }

    impl Sortable for Counting {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.items[i] < self.items[j]
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.items.swap(i, j);
            self.swaps += 1;
        }
    }

    #[test]
    fn test_insertion_sort_empty() {
        let mut arr: Vec<i32> = vec![];
        insertion_sort(arr.as_mut_slice());
        assert!(arr.is_empty());
    }

    #[test]
    fn test_insertion_sort_single() {
        let mut arr = vec![1];
        insertion_sort(arr.as_mut_slice());
        assert_eq!(arr, vec![1]);
    }

    #[test]
    fn test_insertion_sort_reverse() {
        let mut arr = vec![5, 4, 3, 2, 1];
        insertion_sort(arr.as_mut_slice());
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_strings() {
        let mut arr = vec!["banana", "apple", "cherry"];
        insertion_sort(arr.as_mut_slice());
        assert_eq!(arr, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sorted_input_needs_no_swaps() {
        let mut data = Counting {
            items: vec![1, 2, 3, 4],
            swaps: 0,
        };
        insertion_sort(&mut data);
        assert_eq!(data.swaps, 0);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_custom_sortable() {
        let mut data = Counting {
            items: vec![3, 1, 2],
            swaps: 0,
        };
        insertion_sort(&mut data);
        assert_eq!(data.items, vec![1, 2, 3]);
        assert_eq!(data.swaps, 2);
    }
}
