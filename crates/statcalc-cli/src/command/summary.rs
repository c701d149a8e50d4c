use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::{
    report,
    util::{InputArg, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: Format,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let stats = arg.input.load()?;
    info!(count = stats.len(), format = ?arg.format, "summarizing dataset");

    // An empty dataset has no summary; JSON output is then `null`.
    let summary = report::summarize(&stats)?;
    let mut output = Output::create(arg.output.as_deref())?;
    match arg.format {
        Format::Text => output.emit(|writer| report::write_summary(writer, summary.as_ref()))?,
        Format::Json => output.emit_json(&summary)?,
    }
    Ok(())
}
