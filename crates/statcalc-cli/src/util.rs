use std::{
    fs::{self, File},
    io::{self, BufWriter, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use statcalc_stats::Statistics;
use tracing::debug;

/// Where a command's report goes: stdout, or a file created up front.
pub(crate) struct Output {
    writer: Box<dyn io::Write>,
    target: String,
}

impl Output {
    /// Opens `path` for writing, or stdout when `path` is `None` or `-`.
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if path != Path::new("-") => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Ok(Self {
                    writer: Box::new(BufWriter::new(file)),
                    target: path.display().to_string(),
                })
            }
            _ => Ok(Self::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
            target: "stdout".to_owned(),
        }
    }

    /// Runs `render` against the destination and flushes it.
    pub fn emit<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut dyn io::Write) -> io::Result<()>,
    {
        render(&mut *self.writer)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to write report to {}", self.target))
    }

    pub fn emit_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        self.emit(|writer| {
            serde_json::to_writer_pretty(&mut *writer, value)?;
            writeln!(writer)
        })
    }
}

/// Where a command reads its dataset from.
#[derive(Default, Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Values to analyze; when empty, values are read from `--input` or stdin
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// File with integers separated by whitespace or commas ("-" for stdin)
    #[arg(long, short, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Reject datasets longer than this many values
    #[arg(long)]
    pub max_len: Option<usize>,
}

impl InputArg {
    /// Builds the store from the configured source.
    pub fn load(&self) -> anyhow::Result<Statistics> {
        let values = if !self.values.is_empty() {
            self.values.clone()
        } else {
            let text = match self.input.as_deref() {
                Some(path) if path != Path::new("-") => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?,
                _ => {
                    let mut text = String::new();
                    io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read values from stdin")?;
                    text
                }
            };
            parse_values(&text)?
        };
        debug!(count = values.len(), "loaded values");

        let mut stats = match self.max_len {
            Some(max_len) => Statistics::with_max_len(max_len),
            None => Statistics::new(),
        };
        stats
            .replace(values)
            .context("Input does not fit the configured --max-len")?;
        Ok(stats)
    }
}

/// Parses integers separated by whitespace and/or commas.
///
/// Lines starting with `#` are comments.
pub fn parse_values(text: &str) -> anyhow::Result<Vec<i64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .flat_map(|(idx, line)| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(move |token| (idx + 1, token))
        })
        .map(|(line_no, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid integer {token:?} on line {line_no}"))
        })
        .collect()
}
