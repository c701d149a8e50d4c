//! Text rendering of statistics
//!
//! Detailed summaries print the mean and standard deviations to 4 decimal
//! places and the median to 1; abbreviated lines use 2 decimal places.

use std::io;

use statcalc_stats::{Outliers, Statistics, StatsError, Summary};

const NOT_APPLICABLE: &str = "N/A";

/// Joins mode values with `", "`.
pub(crate) fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarizes a store, mapping an empty store to `None`.
pub(crate) fn summarize(stats: &Statistics) -> Result<Option<Summary>, StatsError> {
    match stats.summary() {
        Ok(summary) => Ok(Some(summary)),
        Err(StatsError::EmptyDataset { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Writes the detailed summary, or a placeholder when there is none.
pub(crate) fn write_summary(
    writer: &mut dyn io::Write,
    summary: Option<&Summary>,
) -> io::Result<()> {
    let Some(summary) = summary else {
        return writeln!(writer, "No data available");
    };
    writeln!(writer, "Statistics Summary:")?;
    writeln!(writer, "Data Points: {}", summary.count)?;
    writeln!(
        writer,
        "Min: {}, Max: {}, Range: {}",
        summary.min, summary.max, summary.range
    )?;
    writeln!(writer, "Mean: {:.4}", summary.mean)?;
    writeln!(writer, "Median: {:.1}", summary.median)?;
    writeln!(writer, "Mode(s): {}", join_values(&summary.modes))?;
    match summary.sample_std_dev {
        Some(std_dev) => writeln!(writer, "Sample Std Dev: {std_dev:.4}")?,
        None => writeln!(writer, "Sample Std Dev: {NOT_APPLICABLE}")?,
    }
    writeln!(writer, "Population Std Dev: {:.4}", summary.population_std_dev)?;
    Ok(())
}

/// Writes mean, median, and mode on three lines.
///
/// Queries that fail print their sentinel.
pub(crate) fn write_abbreviated(
    writer: &mut dyn io::Write,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(writer, "Mean: {:.2}", stats.mean().unwrap_or_default())?;
    writeln!(writer, "Median: {:.1}", stats.median().unwrap_or_default())?;
    writeln!(writer, "Mode: {}", join_values(stats.mode().unwrap_or_default()))?;
    Ok(())
}

pub(crate) fn write_outliers(writer: &mut dyn io::Write, outliers: &Outliers) -> io::Result<()> {
    writeln!(writer, "Outlier detection (\u{b1}{} std dev):", outliers.sigmas)?;
    writeln!(
        writer,
        "Lower bound: {:.2}, Upper bound: {:.2}",
        outliers.lower_bound, outliers.upper_bound
    )?;
    if outliers.values.is_empty() {
        writeln!(writer, "No significant outliers found.")?;
    } else {
        writeln!(writer, "Potential outliers: {}", join_values(&outliers.values))?;
    }
    Ok(())
}
