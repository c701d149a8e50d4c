//! Mode detection over sorted data
//!
//! Equal values are adjacent in a sorted slice, so the frequency of every
//! distinct value is the length of its run. Mode detection is two linear scans
//! over those runs: the first finds the longest run, the second collects every
//! value whose run is that long.
//!
//! # Examples
//!
//! ```
//! use statcalc_stats::mode::{modes_of_sorted, run_lengths};
//!
//! let sorted = [1, 1, 2, 2, 3, 3, 4];
//! assert_eq!(
//!     run_lengths(&sorted).collect::<Vec<_>>(),
//!     vec![(1, 2), (2, 2), (3, 2), (4, 1)],
//! );
//! assert_eq!(modes_of_sorted(&sorted), vec![1, 2, 3]);
//! ```

/// Iterates `(value, run_length)` pairs of a sorted slice, ascending by value.
///
/// Each distinct value appears exactly once.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
pub fn run_lengths<T>(sorted_values: &[T]) -> impl Iterator<Item = (T, usize)> + '_
where
    T: Ord + Copy,
{
    assert!(
        sorted_values.is_sorted(),
        "values must be sorted in ascending order"
    );
    sorted_values
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
}

/// Returns every value whose frequency equals the maximum frequency.
///
/// The result is ascending and free of duplicates. When every value occurs
/// once, every value is a mode and the whole (deduplicated) input is returned.
/// An empty input yields an empty result.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use statcalc_stats::mode::modes_of_sorted;
///
/// assert_eq!(modes_of_sorted(&[42]), vec![42]);
/// assert_eq!(modes_of_sorted(&[1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(modes_of_sorted(&[67, 85, 85, 85, 92, 92]), vec![85]);
/// ```
#[must_use]
pub fn modes_of_sorted<T>(sorted_values: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let Some(max_freq) = run_lengths(sorted_values).map(|(_, len)| len).max() else {
        return vec![];
    };
    run_lengths(sorted_values)
        .filter(|&(_, len)| len == max_freq)
        .map(|(value, _)| value)
        .collect()
}
