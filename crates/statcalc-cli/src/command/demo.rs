//! Demonstration scenarios
//!
//! Walks through the store's behavior on small datasets: basic aggregates,
//! full summaries, invalidation on append, edge cases, tied modes, and an
//! exam-score analysis with outlier detection.

use std::io::{self, Write as _};

use clap::Args;
use statcalc_stats::Statistics;

use crate::report;

const EXAM_SCORES: [i64; 12] = [85, 92, 78, 92, 85, 67, 85, 92, 74, 88, 90, 85];

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct DemoArg {
    /// Run only this scenario (1-6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub scenario: Option<u8>,
}

type Scenario = fn(&mut dyn io::Write) -> anyhow::Result<()>;

const SCENARIOS: [(&str, Scenario); 6] = [
    ("Basic Statistics", basic_statistics),
    ("Complete Summary", complete_summary),
    ("Dynamic Data Manipulation", dynamic_manipulation),
    ("Edge Cases", edge_cases),
    ("Multiple Modes", multiple_modes),
    ("Exam Scores Analysis", exam_scores),
];

pub(crate) fn run(arg: &DemoArg) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    write_scenarios(&mut stdout, arg.scenario)?;
    stdout.flush()?;
    Ok(())
}

fn write_scenarios(writer: &mut dyn io::Write, only: Option<u8>) -> anyhow::Result<()> {
    for (number, (title, scenario)) in (1..).zip(SCENARIOS) {
        if only.is_some_and(|n| n != number) {
            continue;
        }
        writeln!(writer, "\n========== Example {number}: {title} ==========")?;
        scenario(writer)?;
    }
    Ok(())
}

fn basic_statistics(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let stats = Statistics::from_values([1, 2, 2, 3, 4, 5, 5, 5, 6]);
    writeln!(writer, "Data: {}", report::join_values(stats.values()))?;
    report::write_abbreviated(writer, &stats)?;
    Ok(())
}

fn complete_summary(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let stats = Statistics::from_values((1..=10).map(|i| i * 10));
    report::write_summary(writer, report::summarize(&stats)?.as_ref())?;
    Ok(())
}

fn dynamic_manipulation(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let mut stats = Statistics::new();
    for v in [1, 2, 3] {
        stats.append(v)?;
    }
    writeln!(writer, "Initial data: [{}]", report::join_values(stats.values()))?;
    writeln!(writer, "Initial mean: {:.2}", stats.mean()?)?;

    stats.append(4)?;
    stats.append(5)?;
    writeln!(writer, "After adding values: [{}]", report::join_values(stats.values()))?;
    writeln!(writer, "New mean: {:.2}", stats.mean()?)?;

    stats.append_all([6, 7, 8])?;
    writeln!(
        writer,
        "After adding multiple values: [{}]",
        report::join_values(stats.values())
    )?;
    report::write_summary(writer, report::summarize(&stats)?.as_ref())?;
    Ok(())
}

fn edge_cases(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let mut stats = Statistics::new();
    writeln!(writer, "Empty store:")?;
    writeln!(writer, "Count: {}", stats.len())?;
    match stats.mean() {
        Ok(mean) => writeln!(writer, "Mean: {mean:.4}")?,
        Err(e) => writeln!(writer, "Mean: {:.4} ({e})", f64::default())?,
    }
    report::write_summary(writer, report::summarize(&stats)?.as_ref())?;

    stats.replace(vec![42])?;
    writeln!(writer, "\nSingle value [42]:")?;
    writeln!(writer, "Mean: {:.2}", stats.mean()?)?;
    writeln!(writer, "Median: {:.1}", stats.median()?)?;
    writeln!(writer, "Mode: {}", report::join_values(stats.mode()?))?;
    match stats.sample_std_dev() {
        Ok(std_dev) => writeln!(writer, "Sample Std Dev: {std_dev:.4}")?,
        Err(e) => writeln!(writer, "Sample Std Dev: N/A ({e})")?,
    }
    Ok(())
}

fn multiple_modes(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let stats = Statistics::from_values([1, 1, 2, 2, 3, 3, 4]);
    writeln!(writer, "Data: {}", report::join_values(stats.values()))?;
    writeln!(
        writer,
        "Mode(s): {} (all values appear twice except 4)",
        report::join_values(stats.mode()?)
    )?;
    Ok(())
}

fn exam_scores(writer: &mut dyn io::Write) -> anyhow::Result<()> {
    let stats = Statistics::from_values(EXAM_SCORES);
    writeln!(writer, "Exam Scores: {}", report::join_values(stats.values()))?;
    writeln!(writer, "\nAnalysis:")?;
    writeln!(writer, "Number of students: {}", stats.len())?;
    writeln!(writer, "Average score: {:.1}", stats.mean()?)?;
    writeln!(writer, "Median score: {:.1}", stats.median()?)?;
    writeln!(
        writer,
        "Most common score(s): {}",
        report::join_values(stats.mode()?)
    )?;
    writeln!(writer, "Score range: {}", stats.range()?)?;
    writeln!(writer, "Standard deviation: {:.2}", stats.sample_std_dev()?)?;
    writeln!(writer)?;
    report::write_outliers(writer, &stats.outliers(2.0)?)?;
    Ok(())
}
