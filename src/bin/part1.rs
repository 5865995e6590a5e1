use amicable::CLIArgs;
use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    amicable::logging::init_logging(args.verbose)
        .with_context(|| format!("Failed to set up logging(verbose: {}).", args.verbose))?;

    const UPPER_BOUND: u64 = 10_000;
    println!("{}", amicable::sum_amicable_below(UPPER_BOUND));

    Ok(())
}
