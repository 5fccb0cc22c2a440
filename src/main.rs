mod aggregates;
mod dataset;
mod error;
mod report;
mod stats;

use std::path::{Path, PathBuf};

use aggregates::Aggregates;
use anyhow::{Context, Result};
use argh::FromArgs;
use dataset::Dataset;
use report::Report;

#[derive(FromArgs, Debug)]
/// Summary statistics over a collection of integer sets, one set per line
struct Args {
    /// path to the dataset, one space-separated set of integers per line
    #[argh(positional)]
    path: PathBuf,
}

fn compute(path: &Path) -> Result<Report> {
    let dataset = Dataset::open(path)?;
    let report = Aggregates::from_dataset(dataset)?.finish()?;
    Ok(report)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    let report = compute(&args.path).context(format!(
        "unable to compute statistics for {}",
        args.path.display()
    ))?;

    // printed in one piece so a failure never leaves a partial report
    print!("{}", report);

    Ok(())
}
