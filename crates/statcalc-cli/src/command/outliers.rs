use anyhow::Context;
use clap::Args;

use crate::{
    report,
    util::{InputArg, Output},
};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct OutliersArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Width of the accepted band around the mean, in sample standard deviations
    #[arg(long, default_value_t = 2.0)]
    pub sigma: f64,

    /// Print the bounds and outliers as JSON
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &OutliersArg) -> anyhow::Result<()> {
    anyhow::ensure!(
        arg.sigma.is_finite() && arg.sigma >= 0.0,
        "--sigma must be a non-negative number, got {}",
        arg.sigma
    );
    let stats = arg.input.load()?;
    let outliers = stats
        .outliers(arg.sigma)
        .context("Cannot detect outliers")?;

    let mut output = Output::stdout();
    if arg.json {
        output.emit_json(&outliers)?;
    } else {
        output.emit(|writer| report::write_outliers(writer, &outliers))?;
    }
    Ok(())
}
