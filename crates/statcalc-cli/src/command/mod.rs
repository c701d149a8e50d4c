use clap::{Parser, Subcommand};

use self::{demo::DemoArg, outliers::OutliersArg, summary::SummaryArg};

mod demo;
mod outliers;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run; defaults to the demonstration
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print every statistic of a dataset
    Summary(#[clap(flatten)] SummaryArg),
    /// Flag values far from the mean
    Outliers(#[clap(flatten)] OutliersArg),
    /// Walk through example datasets
    Demo(#[clap(flatten)] DemoArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Demo(DemoArg::default())) {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Outliers(arg) => outliers::run(&arg)?,
        Mode::Demo(arg) => demo::run(&arg)?,
    }
    Ok(())
}
