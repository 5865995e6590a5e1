use std::{error, fmt::Display};

use clap::Parser;

pub mod amicable;
pub mod divisor;
pub mod logging;

pub use amicable::{amicable_numbers_below, amicable_partner, is_amicable, sum_amicable_below};
pub use divisor::{divisor_sum, is_perfect, proper_divisors};

#[derive(Debug)]
pub enum Error {
    LoggingInit(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LoggingInit(s) => write!(f, "Failed to initialize logging: {}", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Log every amicable pair found to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
