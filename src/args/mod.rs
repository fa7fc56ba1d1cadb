//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::CheckArgs;
pub use defaults::{
    DEFAULT_DATABASE, DEFAULT_INFLUX_URL, DEFAULT_INPUT_METRIC, DEFAULT_OUTPUT_METRIC,
    DEFAULT_QUANTILE, DEFAULT_TIMEOUT,
};
pub use types::{Probability, Verbosity};

pub(crate) use defaults::DEFAULT_USER_AGENT;
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
