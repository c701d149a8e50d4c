use serde::Serialize;

/// Every aggregate of a non-empty dataset, collected in one value.
///
/// Produced by [`Statistics::summary`](crate::Statistics::summary). This is
/// the input of report printers; it holds no reference to the store.
///
/// # Examples
///
/// ```
/// use statcalc_stats::Statistics;
///
/// let stats = Statistics::from_values([10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
/// let summary = stats.summary().unwrap();
/// assert_eq!(summary.count, 10);
/// assert_eq!((summary.min, summary.max, summary.range), (10, 100, 90));
/// assert_eq!(summary.median, 55.0);
/// assert!(summary.sample_std_dev.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of data points.
    pub count: usize,
    /// Smallest value.
    pub min: i64,
    /// Largest value.
    pub max: i64,
    /// `max - min`.
    pub range: u64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the average of the two middle values for even counts.
    pub median: f64,
    /// Most frequent values, ascending.
    pub modes: Vec<i64>,
    /// Sample standard deviation, `None` with fewer than two data points.
    pub sample_std_dev: Option<f64>,
    /// Population standard deviation.
    pub population_std_dev: f64,
}

/// Values lying outside `mean ± sigmas · sample_std_dev`.
///
/// Produced by [`Statistics::outliers`](crate::Statistics::outliers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outliers {
    /// Width of the acceptance band in standard deviations.
    pub sigmas: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Values strictly outside the bounds, in insertion order.
    pub values: Vec<i64>,
}
