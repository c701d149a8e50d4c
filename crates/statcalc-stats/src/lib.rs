//! Memoized descriptive statistics over a growable integer dataset.
//!
//! The central type is [`Statistics`]: callers append `i64` values and query
//! aggregates. Each aggregate is computed on first request and cached until the
//! next mutation, which invalidates the sorted view and every cached result
//! together.
//!
//! - **Central tendency**: mean, median, mode set
//! - **Dispersion**: sample and population standard deviation, range
//! - **Derived**: [`Summary`] of every aggregate, and outlier detection
//!
//! # Modules
//!
//! - [`mode`]: Run-length based mode detection over sorted slices
//!
//! # Examples
//!
//! ```
//! use statcalc_stats::{Deviation, Statistics};
//!
//! let mut stats = Statistics::new();
//! stats.append_all([1, 1, 2, 2, 3, 3, 4]).unwrap();
//! assert_eq!(stats.mode().unwrap(), &[1, 2, 3]);
//! assert_eq!(stats.median().unwrap(), 2.0);
//!
//! stats.clear();
//! stats.append(42).unwrap();
//! assert_eq!(stats.mode().unwrap(), &[42]);
//! assert!(stats.std_dev(Deviation::Sample).is_err());
//! assert_eq!(stats.std_dev(Deviation::Population).unwrap(), 0.0);
//! ```

pub use self::{
    error::{Aggregate, StatsError},
    shared::SharedStatistics,
    store::{Deviation, Statistics},
    summary::{Outliers, Summary},
};

mod error;
pub mod mode;
mod shared;
mod store;
mod summary;
