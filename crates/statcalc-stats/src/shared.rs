use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Statistics, error::StatsError};

/// A [`Statistics`] store that can be shared between threads.
///
/// The dataset, its sorted view, and every cached aggregate sit behind one
/// lock. Each method holds that lock for its whole duration, so no thread can
/// see a dataset whose caches have not been invalidated yet. Queries that
/// depend on each other (the standard deviation reads the mean) run inside a
/// single critical section via [`SharedStatistics::with`].
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use statcalc_stats::SharedStatistics;
///
/// let shared = SharedStatistics::default();
/// thread::scope(|s| {
///     for t in 0..4 {
///         let shared = &shared;
///         s.spawn(move || shared.append_all((0..10).map(|i| t * 10 + i)).unwrap());
///     }
/// });
/// assert_eq!(shared.with(|stats| stats.len()), 40);
/// assert_eq!(shared.with(|stats| stats.range()).unwrap(), 39);
/// ```
#[derive(Debug, Default)]
pub struct SharedStatistics {
    inner: Mutex<Statistics>,
}

impl From<Statistics> for SharedStatistics {
    fn from(stats: Statistics) -> Self {
        Self {
            inner: Mutex::new(stats),
        }
    }
}

impl SharedStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations run no caller code once the dataset is touched, and the only
    // caller code `with` runs gets `&Statistics`. A panic in another holder
    // therefore leaves either the old store or the new one, never a mix.
    fn lock(&self) -> MutexGuard<'_, Statistics> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, value: i64) -> Result<(), StatsError> {
        self.lock().append(value)
    }

    pub fn append_all<I>(&self, values: I) -> Result<(), StatsError>
    where
        I: IntoIterator<Item = i64>,
    {
        self.lock().append_all(values)
    }

    pub fn replace(&self, values: Vec<i64>) -> Result<(), StatsError> {
        self.lock().replace(values)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Statistics) -> T,
    {
        f(&self.lock())
    }

    /// Consumes the wrapper and returns the store.
    #[must_use]
    pub fn into_inner(self) -> Statistics {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
