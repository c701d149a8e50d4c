use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::{
    error::{Aggregate, StatsError},
    mode,
    summary::{Outliers, Summary},
};

/// Selects the divisor used for the variance behind a standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Deviation {
    /// Divides by `count - 1`. Needs at least two data points.
    #[display("sample")]
    Sample,
    /// Divides by `count`.
    #[display("population")]
    Population,
}

impl Deviation {
    const fn aggregate(self) -> Aggregate {
        match self {
            Deviation::Sample => Aggregate::SampleStdDev,
            Deviation::Population => Aggregate::PopulationStdDev,
        }
    }
}

/// One memoized result per aggregate.
///
/// A populated cell always describes the current dataset: every mutation of
/// [`Statistics`] resets the whole cache before it returns.
#[derive(Debug, Clone, Default)]
struct AggregateCache {
    mean: OnceCell<f64>,
    median: OnceCell<f64>,
    mode: OnceCell<Vec<i64>>,
    sample_std_dev: OnceCell<f64>,
    population_std_dev: OnceCell<f64>,
    range: OnceCell<u64>,
}

impl AggregateCache {
    fn std_dev_slot(&self, deviation: Deviation) -> &OnceCell<f64> {
        match deviation {
            Deviation::Sample => &self.sample_std_dev,
            Deviation::Population => &self.population_std_dev,
        }
    }
}

/// A growable integer dataset with memoized descriptive statistics.
///
/// Queries take `&self` and cache their result on first use, so asking for the
/// same aggregate again on an unchanged dataset is O(1). Any mutation
/// (`append`, `append_all`, `replace`, `clear`) discards the sorted view and
/// every cached aggregate at once.
///
/// Every query returns `Result`. The `Ok` types all implement [`Default`], and
/// the default is the value to use when the dataset cannot produce an answer:
///
/// ```
/// use statcalc_stats::Statistics;
///
/// let stats = Statistics::new();
/// assert!(stats.mean().unwrap_err().is_empty_dataset());
/// assert_eq!(stats.mean().unwrap_or_default(), 0.0);
/// assert!(stats.mode().unwrap_or_default().is_empty());
/// ```
///
/// # Examples
///
/// ```
/// use statcalc_stats::{Deviation, Statistics};
///
/// let mut stats = Statistics::from_values([10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
/// assert_eq!(stats.mean().unwrap(), 55.0);
/// assert_eq!(stats.median().unwrap(), 55.0);
/// assert_eq!(stats.range().unwrap(), 90);
///
/// stats.append(1000).unwrap();
/// assert_eq!(stats.median().unwrap(), 60.0);
/// assert!(stats.std_dev(Deviation::Sample).unwrap() > 250.0);
/// ```
///
/// # Threading
///
/// The cache uses [`OnceCell`], so a store can move between threads but not be
/// shared by reference. Use [`SharedStatistics`](crate::SharedStatistics) to
/// share one store behind a single lock.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    values: Vec<i64>,
    max_len: Option<usize>,
    sorted: OnceCell<Vec<i64>>,
    cache: AggregateCache,
}

impl FromIterator<i64> for Statistics {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            values: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Statistics {
    /// Creates an empty store with no size limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that holds at most `max_len` values.
    ///
    /// Appends past the limit fail with [`StatsError::CapacityExceeded`].
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// let mut stats = Statistics::with_max_len(2);
    /// stats.append_all([1, 2]).unwrap();
    /// assert!(stats.append(3).unwrap_err().is_capacity_exceeded());
    /// assert_eq!(stats.values(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    /// Creates an unbounded store pre-filled with `values`.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().collect()
    }

    /// Returns the data in insertion order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the configured size limit, if any.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    fn remaining_capacity(&self) -> Option<usize> {
        self.max_len
            .map(|max_len| max_len.saturating_sub(self.values.len()))
    }

    fn invalidate(&mut self) {
        debug!(len = self.values.len(), "dataset changed, invalidating caches");
        self.sorted = OnceCell::new();
        self.cache = AggregateCache::default();
    }

    /// Appends one value.
    ///
    /// If the store is full the value is rejected and nothing changes,
    /// including cached results.
    pub fn append(&mut self, value: i64) -> Result<(), StatsError> {
        if let Some(capacity) = self.max_len
            && self.values.len() >= capacity
        {
            return Err(StatsError::CapacityExceeded {
                capacity,
                rejected: 1,
            });
        }
        self.values.push(value);
        self.invalidate();
        Ok(())
    }

    /// Appends every value in order.
    ///
    /// Values are appended until the store is full; the rest are rejected and
    /// counted in the returned [`StatsError::CapacityExceeded`]. Caches are
    /// invalidated once, and only if at least one value was appended.
    ///
    /// The input is drained before the store is touched, so an iterator that
    /// panics leaves the store exactly as it was.
    pub fn append_all<I>(&mut self, values: I) -> Result<(), StatsError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values = values.into_iter();
        let accepted: Vec<i64> = match self.remaining_capacity() {
            Some(remaining) => values.by_ref().take(remaining).collect(),
            None => values.by_ref().collect(),
        };
        let rejected = values.count();

        if !accepted.is_empty() {
            self.values.extend(accepted);
            self.invalidate();
        }
        match self.max_len {
            Some(capacity) if rejected > 0 => {
                Err(StatsError::CapacityExceeded { capacity, rejected })
            }
            _ => Ok(()),
        }
    }

    /// Replaces the whole dataset.
    ///
    /// A replacement longer than the size limit is rejected as a whole and
    /// leaves the store unchanged.
    pub fn replace(&mut self, values: Vec<i64>) -> Result<(), StatsError> {
        if let Some(capacity) = self.max_len
            && values.len() > capacity
        {
            return Err(StatsError::CapacityExceeded {
                capacity,
                rejected: values.len() - capacity,
            });
        }
        self.values = values;
        self.invalidate();
        Ok(())
    }

    /// Removes all values, keeping the size limit.
    pub fn clear(&mut self) {
        self.values.clear();
        self.invalidate();
    }

    fn non_empty(&self, aggregate: Aggregate) -> Result<(), StatsError> {
        if self.values.is_empty() {
            return Err(StatsError::empty(aggregate));
        }
        Ok(())
    }

    /// Sorted copy of the data, rebuilt on first use after a mutation.
    fn sorted(&self) -> &[i64] {
        self.sorted.get_or_init(|| {
            trace!(len = self.values.len(), "rebuilding sorted view");
            let mut sorted = self.values.clone();
            sorted.sort_unstable();
            sorted
        })
    }

    /// Returns the smallest value.
    pub fn min(&self) -> Result<i64, StatsError> {
        self.non_empty(Aggregate::Min)?;
        Ok(self.sorted()[0])
    }

    /// Returns the largest value.
    pub fn max(&self) -> Result<i64, StatsError> {
        self.non_empty(Aggregate::Max)?;
        Ok(self.sorted()[self.values.len() - 1])
    }

    /// Cached-or-computed mean. Callers must have checked for an empty dataset.
    ///
    /// The standard deviation reads the mean through here, which fills the mean
    /// slot as a side effect.
    #[expect(clippy::cast_precision_loss)]
    fn cached_mean(&self) -> f64 {
        *self.cache.mean.get_or_init(|| {
            let sum = self
                .values
                .iter()
                .copied()
                .map(i128::from)
                .sum::<i128>();
            let mean = sum as f64 / self.values.len() as f64;
            trace!(mean, "computed mean");
            mean
        })
    }

    /// Returns the arithmetic mean.
    ///
    /// The sum is accumulated in `i128`, so it cannot overflow.
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// let stats = Statistics::from_values([1, 2, 2, 3, 4, 5, 5, 5, 6]);
    /// assert!((stats.mean().unwrap() - 3.6667).abs() < 1e-4);
    /// ```
    pub fn mean(&self) -> Result<f64, StatsError> {
        self.non_empty(Aggregate::Mean)?;
        Ok(self.cached_mean())
    }

    /// Returns the median.
    ///
    /// With an even number of values this is the average of the two middle
    /// values, so the result may fall between two data points.
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// assert_eq!(Statistics::from_values([3, 1, 2]).median().unwrap(), 2.0);
    /// assert_eq!(Statistics::from_values([1, 2, 3, 4]).median().unwrap(), 2.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn median(&self) -> Result<f64, StatsError> {
        self.non_empty(Aggregate::Median)?;
        Ok(*self.cache.median.get_or_init(|| {
            let sorted = self.sorted();
            let mid = sorted.len() / 2;
            let median = if sorted.len() % 2 == 0 {
                // Halve in f64: the i64 sum of two middle values may overflow.
                (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
            } else {
                sorted[mid] as f64
            };
            trace!(median, "computed median");
            median
        }))
    }

    /// Returns every most-frequent value, ascending.
    ///
    /// Ties are all reported. If no value repeats, every value is a mode.
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// let stats = Statistics::from_values([4, 3, 3, 2, 2, 1, 1]);
    /// assert_eq!(stats.mode().unwrap(), &[1, 2, 3]);
    /// ```
    pub fn mode(&self) -> Result<&[i64], StatsError> {
        self.non_empty(Aggregate::Mode)?;
        let modes = self.cache.mode.get_or_init(|| {
            let modes = mode::modes_of_sorted(self.sorted());
            trace!(num_modes = modes.len(), "computed mode");
            modes
        });
        Ok(modes.as_slice())
    }

    /// Returns the sample or population standard deviation.
    ///
    /// The two variants are cached independently. Computing either one also
    /// caches the mean.
    ///
    /// ```
    /// use statcalc_stats::{Deviation, Statistics};
    ///
    /// let stats = Statistics::from_values([42]);
    /// assert_eq!(stats.std_dev(Deviation::Population).unwrap(), 0.0);
    /// assert!(stats.std_dev(Deviation::Sample).unwrap_err().is_insufficient_data());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn std_dev(&self, deviation: Deviation) -> Result<f64, StatsError> {
        self.non_empty(deviation.aggregate())?;
        let count = self.values.len();
        let divisor = match deviation {
            Deviation::Population => count,
            Deviation::Sample if count < 2 => {
                return Err(StatsError::InsufficientData {
                    required: 2,
                    found: count,
                });
            }
            Deviation::Sample => count - 1,
        };

        Ok(*self.cache.std_dev_slot(deviation).get_or_init(|| {
            let mean = self.cached_mean();
            let sum_sq = self
                .values
                .iter()
                .map(|&v| (v as f64 - mean).powi(2))
                .sum::<f64>();
            let std_dev = (sum_sq / divisor as f64).sqrt();
            trace!(%deviation, std_dev, "computed standard deviation");
            std_dev
        }))
    }

    /// Shorthand for [`std_dev(Deviation::Sample)`](Self::std_dev).
    pub fn sample_std_dev(&self) -> Result<f64, StatsError> {
        self.std_dev(Deviation::Sample)
    }

    /// Shorthand for [`std_dev(Deviation::Population)`](Self::std_dev).
    pub fn population_std_dev(&self) -> Result<f64, StatsError> {
        self.std_dev(Deviation::Population)
    }

    /// Returns `max - min`.
    ///
    /// The result is unsigned so that the full `i64` domain fits.
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// assert_eq!(Statistics::from_values([5, 1, 3]).range().unwrap(), 4);
    /// ```
    pub fn range(&self) -> Result<u64, StatsError> {
        self.non_empty(Aggregate::Range)?;
        Ok(*self.cache.range.get_or_init(|| {
            let sorted = self.sorted();
            let range = sorted[sorted.len() - 1].abs_diff(sorted[0]);
            trace!(range, "computed range");
            range
        }))
    }

    /// Collects every aggregate at once.
    ///
    /// The sample standard deviation is `None` when there are fewer than two
    /// values.
    pub fn summary(&self) -> Result<Summary, StatsError> {
        self.non_empty(Aggregate::Mean)?;
        let sample_std_dev = match self.std_dev(Deviation::Sample) {
            Ok(std_dev) => Some(std_dev),
            Err(StatsError::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(Summary {
            count: self.len(),
            min: self.min()?,
            max: self.max()?,
            range: self.range()?,
            mean: self.mean()?,
            median: self.median()?,
            modes: self.mode()?.to_vec(),
            sample_std_dev,
            population_std_dev: self.std_dev(Deviation::Population)?,
        })
    }

    /// Finds values further than `sigmas` sample standard deviations from the
    /// mean.
    ///
    /// Values are reported in insertion order. Values exactly on a bound are
    /// not outliers.
    ///
    /// ```
    /// use statcalc_stats::Statistics;
    ///
    /// let stats = Statistics::from_values([85, 92, 78, 92, 85, 67, 85, 92, 74, 88, 90, 85]);
    /// let outliers = stats.outliers(2.0).unwrap();
    /// assert_eq!(outliers.values, vec![67]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn outliers(&self, sigmas: f64) -> Result<Outliers, StatsError> {
        let std_dev = self.std_dev(Deviation::Sample)?;
        let mean = self.cached_mean();
        let lower_bound = mean - sigmas * std_dev;
        let upper_bound = mean + sigmas * std_dev;
        let values = self
            .values
            .iter()
            .copied()
            .filter(|&v| {
                let v = v as f64;
                v < lower_bound || v > upper_bound
            })
            .collect();
        Ok(Outliers {
            sigmas,
            lower_bound,
            upper_bound,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        iter,
        panic::{self, AssertUnwindSafe},
    };

    use super::*;

    const EXAM_SCORES: [i64; 12] = [85, 92, 78, 92, 85, 67, 85, 92, 74, 88, 90, 85];

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected} +/- {tolerance}, got {actual}"
        );
    }

    #[test]
    fn test_empty_store_reports_every_aggregate() {
        let stats = Statistics::new();
        assert_eq!(stats.mean(), Err(StatsError::empty(Aggregate::Mean)));
        assert_eq!(stats.median(), Err(StatsError::empty(Aggregate::Median)));
        assert_eq!(stats.mode(), Err(StatsError::empty(Aggregate::Mode)));
        assert_eq!(
            stats.std_dev(Deviation::Sample),
            Err(StatsError::empty(Aggregate::SampleStdDev))
        );
        assert_eq!(
            stats.std_dev(Deviation::Population),
            Err(StatsError::empty(Aggregate::PopulationStdDev))
        );
        assert_eq!(stats.range(), Err(StatsError::empty(Aggregate::Range)));
        assert_eq!(stats.min(), Err(StatsError::empty(Aggregate::Min)));
        assert_eq!(stats.max(), Err(StatsError::empty(Aggregate::Max)));
        assert!(stats.summary().unwrap_err().is_empty_dataset());
    }

    #[test]
    fn test_empty_store_sentinels() {
        let stats = Statistics::new();
        assert_eq!(stats.mean().unwrap_or_default(), 0.0);
        assert_eq!(stats.median().unwrap_or_default(), 0.0);
        assert!(stats.mode().unwrap_or_default().is_empty());
        assert_eq!(stats.sample_std_dev().unwrap_or_default(), 0.0);
        assert_eq!(stats.population_std_dev().unwrap_or_default(), 0.0);
        assert_eq!(stats.range().unwrap_or_default(), 0);
    }

    #[test]
    fn test_failed_query_leaves_slot_empty() {
        let mut stats = Statistics::from_values([7]);
        assert!(stats.sample_std_dev().is_err());
        assert!(stats.cache.sample_std_dev.get().is_none());

        stats.append(9).unwrap();
        assert_close(stats.sample_std_dev().unwrap(), 2.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn test_cleared_store_is_like_new() {
        let mut stats = Statistics::from_values([1, 2, 3]);
        assert_eq!(stats.mean().unwrap(), 2.0);
        stats.clear();
        assert!(stats.is_empty());
        assert!(stats.mean().unwrap_err().is_empty_dataset());
        assert!(stats.mode().unwrap_err().is_empty_dataset());
        assert!(stats.sorted.get().is_none());
    }

    #[test]
    fn test_mean() {
        let stats = Statistics::from_values([1, 2, 2, 3, 4, 5, 5, 5, 6]);
        assert_close(stats.mean().unwrap(), 3.6667, 1e-4);
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let stats = Statistics::from_values([i64::MAX, i64::MAX, i64::MAX]);
        // Within a few ulps at this magnitude.
        assert_close(stats.mean().unwrap(), i64::MAX as f64, 1e5);

        let stats = Statistics::from_values([i64::MIN, i64::MAX]);
        assert_close(stats.mean().unwrap(), -0.5, 1.0);
    }

    #[test]
    fn test_median_parity() {
        let stats = Statistics::from_values((1..=10).map(|i| i * 10));
        assert_eq!(stats.median().unwrap(), 55.0);

        let stats = Statistics::from_values([1, 2, 3]);
        assert_eq!(stats.median().unwrap(), 2.0);

        let stats = Statistics::from_values([42]);
        assert_eq!(stats.median().unwrap(), 42.0);
    }

    #[test]
    fn test_median_of_extremes_does_not_overflow() {
        let stats = Statistics::from_values([i64::MAX, i64::MAX]);
        assert_close(stats.median().unwrap(), i64::MAX as f64, 1.0);
    }

    #[test]
    fn test_mode_multiplicity() {
        let stats = Statistics::from_values([1, 1, 2, 2, 3, 3, 4]);
        assert_eq!(stats.mode().unwrap(), &[1, 2, 3]);

        let stats = Statistics::from_values([42]);
        assert_eq!(stats.mode().unwrap(), &[42]);

        let stats = Statistics::from_values([5, 3, 9, 1]);
        assert_eq!(stats.mode().unwrap(), &[1, 3, 5, 9]);
    }

    #[test]
    fn test_std_dev_guard() {
        let stats = Statistics::from_values([42]);
        assert_eq!(
            stats.std_dev(Deviation::Sample),
            Err(StatsError::InsufficientData {
                required: 2,
                found: 1
            })
        );
        assert_eq!(stats.std_dev(Deviation::Population), Ok(0.0));
    }

    #[test]
    fn test_std_dev_divisors() {
        let stats = Statistics::from_values([2, 4, 4, 4, 5, 5, 7, 9]);
        assert_close(stats.population_std_dev().unwrap(), 2.0, 1e-12);
        assert_close(stats.sample_std_dev().unwrap(), 2.138_089_935, 1e-9);
    }

    #[test]
    fn test_std_dev_variants_are_cached_independently() {
        let stats = Statistics::from_values([1, 2, 3, 4]);
        stats.population_std_dev().unwrap();
        assert!(stats.cache.population_std_dev.get().is_some());
        assert!(stats.cache.sample_std_dev.get().is_none());
        // The mean is filled as a side effect.
        assert!(stats.cache.mean.get().is_some());
    }

    #[test]
    fn test_range_and_mode_ignore_insertion_order() {
        let a = Statistics::from_values([5, 1, 3]);
        let b = Statistics::from_values([1, 3, 5]);
        assert_eq!(a.range().unwrap(), 4);
        assert_eq!(b.range().unwrap(), 4);

        let a = Statistics::from_values([3, 1, 3, 2, 1]);
        let b = Statistics::from_values([1, 1, 2, 3, 3]);
        assert_eq!(a.mode().unwrap(), b.mode().unwrap());
    }

    #[test]
    fn test_range_spans_full_domain() {
        let stats = Statistics::from_values([i64::MIN, 0, i64::MAX]);
        assert_eq!(stats.range().unwrap(), u64::MAX);
    }

    #[test]
    fn test_min_max_read_sorted_view() {
        let stats = Statistics::from_values([3, -7, 12, 0]);
        assert_eq!(stats.min().unwrap(), -7);
        assert_eq!(stats.max().unwrap(), 12);
        assert_eq!(stats.sorted.get().map(Vec::as_slice), Some(&[-7, 0, 3, 12][..]));
    }

    #[test]
    fn test_append_invalidates_every_slot() {
        let mut stats = Statistics::from_values([1, 2, 3]);
        let _ = stats.summary().unwrap();
        assert!(stats.cache.mode.get().is_some());
        assert!(stats.sorted.get().is_some());

        stats.append(4).unwrap();
        assert!(stats.sorted.get().is_none());
        assert!(stats.cache.mean.get().is_none());
        assert!(stats.cache.median.get().is_none());
        assert!(stats.cache.mode.get().is_none());
        assert!(stats.cache.sample_std_dev.get().is_none());
        assert!(stats.cache.population_std_dev.get().is_none());
        assert!(stats.cache.range.get().is_none());

        assert_eq!(stats.mean().unwrap(), 2.5);
        assert_eq!(stats.median().unwrap(), 2.5);
        assert_eq!(stats.range().unwrap(), 3);
    }

    #[test]
    fn test_dynamic_manipulation() {
        let mut stats = Statistics::new();
        for v in [1, 2, 3] {
            stats.append(v).unwrap();
        }
        assert_eq!(stats.mean().unwrap(), 2.0);

        stats.append(4).unwrap();
        stats.append(5).unwrap();
        assert_eq!(stats.mean().unwrap(), 3.0);

        stats.append_all([6, 7, 8]).unwrap();
        assert_eq!(stats.values(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(stats.mean().unwrap(), 4.5);
        assert_eq!(stats.median().unwrap(), 4.5);
        assert_eq!(stats.range().unwrap(), 7);
        assert_close(stats.sample_std_dev().unwrap(), 2.449_489_742_8, 1e-9);
        assert_close(stats.population_std_dev().unwrap(), 2.291_287_847_5, 1e-9);
    }

    #[test]
    fn test_capacity_rejects_single_append_without_invalidating() {
        let mut stats = Statistics::with_max_len(3);
        stats.append_all([1, 2, 3]).unwrap();
        assert_eq!(stats.mean().unwrap(), 2.0);

        assert_eq!(
            stats.append(4),
            Err(StatsError::CapacityExceeded {
                capacity: 3,
                rejected: 1
            })
        );
        assert_eq!(stats.values(), &[1, 2, 3]);
        assert!(stats.cache.mean.get().is_some());
    }

    #[test]
    fn test_capacity_append_all_keeps_prefix() {
        let mut stats = Statistics::with_max_len(4);
        stats.append(10).unwrap();
        assert_eq!(
            stats.append_all([20, 30, 40, 50, 60]),
            Err(StatsError::CapacityExceeded {
                capacity: 4,
                rejected: 2
            })
        );
        assert_eq!(stats.values(), &[10, 20, 30, 40]);
        assert_eq!(stats.mean().unwrap(), 25.0);
    }

    #[test]
    fn test_append_all_from_panicking_source_changes_nothing() {
        let mut stats = Statistics::from_values([1, 2, 3]);
        assert_eq!(stats.mean().unwrap(), 2.0);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let source = [100, 100].into_iter().chain(iter::from_fn(|| -> Option<i64> {
                panic!("source failed")
            }));
            stats.append_all(source)
        }));
        assert!(result.is_err());

        assert_eq!(stats.values(), &[1, 2, 3]);
        assert_eq!(stats.mean().unwrap(), 2.0);
        assert_eq!(stats.max().unwrap(), 3);
    }

    #[test]
    fn test_capacity_replace_is_all_or_nothing() {
        let mut stats = Statistics::with_max_len(2);
        stats.replace(vec![1, 2]).unwrap();
        assert!(stats.replace(vec![1, 2, 3]).unwrap_err().is_capacity_exceeded());
        assert_eq!(stats.values(), &[1, 2]);

        stats.clear();
        assert_eq!(stats.max_len(), Some(2));
    }

    #[test]
    fn test_zero_capacity() {
        let mut stats = Statistics::with_max_len(0);
        assert!(stats.append(1).is_err());
        assert!(stats.append_all([]).is_ok());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_repeated_queries_are_bit_identical() {
        let stats = Statistics::from_values(EXAM_SCORES);
        let first = (
            stats.mean().unwrap().to_bits(),
            stats.median().unwrap().to_bits(),
            stats.sample_std_dev().unwrap().to_bits(),
            stats.population_std_dev().unwrap().to_bits(),
        );
        let second = (
            stats.mean().unwrap().to_bits(),
            stats.median().unwrap().to_bits(),
            stats.sample_std_dev().unwrap().to_bits(),
            stats.population_std_dev().unwrap().to_bits(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_exam_scores() {
        let stats = Statistics::from_values(EXAM_SCORES);
        assert_eq!(format!("{:.1}", stats.mean().unwrap()), "84.4");
        assert_close(stats.mean().unwrap(), 84.416_666_67, 1e-6);
        assert_eq!(stats.median().unwrap(), 85.0);
        assert_eq!(stats.mode().unwrap(), &[85]);
        assert_eq!(stats.range().unwrap(), 25);
        assert_close(stats.sample_std_dev().unwrap(), 7.809_764_67, 1e-6);

        let outliers = stats.outliers(2.0).unwrap();
        assert_eq!(outliers.values, vec![67]);
        assert_close(outliers.lower_bound, 68.797_137, 1e-5);
        assert_close(outliers.upper_bound, 100.036_196, 1e-5);
    }

    #[test]
    fn test_outliers_need_two_values() {
        let stats = Statistics::from_values([5]);
        assert!(stats.outliers(2.0).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_summary() {
        let stats = Statistics::from_values([42]);
        let summary = stats.summary().unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 42);
        assert_eq!(summary.max, 42);
        assert_eq!(summary.range, 0);
        assert_eq!(summary.modes, vec![42]);
        assert_eq!(summary.sample_std_dev, None);
        assert_eq!(summary.population_std_dev, 0.0);
    }
}
