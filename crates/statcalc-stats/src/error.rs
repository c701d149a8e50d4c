/// The aggregates a [`Statistics`](crate::Statistics) store can compute.
///
/// Used to name the failing query in [`StatsError::EmptyDataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Aggregate {
    #[display("mean")]
    Mean,
    #[display("median")]
    Median,
    #[display("mode")]
    Mode,
    #[display("sample standard deviation")]
    SampleStdDev,
    #[display("population standard deviation")]
    PopulationStdDev,
    #[display("range")]
    Range,
    #[display("minimum")]
    Min,
    #[display("maximum")]
    Max,
}

/// Errors reported by the statistics store.
///
/// None of these are fatal. A query that fails leaves its cache slot empty, and
/// the `Ok` type of every query implements [`Default`] so that
/// `unwrap_or_default()` yields the defined sentinel (`0.0`, `0`, or an empty
/// mode set).
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum StatsError {
    #[display("cannot calculate {aggregate}: data is empty")]
    EmptyDataset {
        #[error(not(source))]
        aggregate: Aggregate,
    },
    #[display("need at least {required} data points, found {found}")]
    InsufficientData { required: usize, found: usize },
    #[display("data size limit ({capacity}) exceeded, rejected {rejected} value(s)")]
    CapacityExceeded { capacity: usize, rejected: usize },
}

impl StatsError {
    pub(crate) fn empty(aggregate: Aggregate) -> Self {
        Self::EmptyDataset { aggregate }
    }
}
