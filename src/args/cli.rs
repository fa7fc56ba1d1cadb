use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_DATABASE, DEFAULT_INFLUX_URL, DEFAULT_INPUT_METRIC, DEFAULT_OUTPUT_METRIC,
    DEFAULT_QUANTILE, DEFAULT_TIMEOUT,
};
use super::parsers::{parse_duration_arg, parse_probability};
use super::types::{Probability, Verbosity};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "QuantileChecker: reports the combined in/out bandwidth quantile of a host service, read from InfluxDB, as monitoring-plugin performance data."
)]
pub struct CheckArgs {
    /// The hostname to select (required, may come from the config file)
    #[arg(long, short = 'H')]
    pub hostname: Option<String>,

    /// The service to select (required, may come from the config file)
    #[arg(long, short = 'S')]
    pub service: Option<String>,

    /// Measurement where the data will be queried (required, may come from the config file)
    #[arg(long, short = 'M')]
    pub measurement: Option<String>,

    /// The name of the input bandwidth metric
    #[arg(long = "in", short = 'I', default_value = DEFAULT_INPUT_METRIC)]
    pub input_metric: String,

    /// The name of the output bandwidth metric
    #[arg(long = "out", short = 'O', default_value = DEFAULT_OUTPUT_METRIC)]
    pub output_metric: String,

    /// The maximum amount of bandwidth usable (accepted, not evaluated yet)
    #[arg(long = "max", short = 'm')]
    pub max_bandwidth: Option<u64>,

    /// The fee in euros in case the threshold is exceeded (accepted, not evaluated yet)
    #[arg(long, short = 'p')]
    pub penalty: Option<f64>,

    /// The quantile to compute over the combined samples, within [0, 1]
    #[arg(
        long,
        short = 'q',
        default_value = DEFAULT_QUANTILE,
        value_parser = parse_probability
    )]
    pub quantile: Probability,

    /// Logging verbosity on stderr: 0 == errors only, 1 == info
    #[arg(long, short = 'v', default_value = "0")]
    pub verbosity: Verbosity,

    /// Base URL of the InfluxDB HTTP API
    #[arg(long = "influx-url", env = "INFLUX_URL", default_value = DEFAULT_INFLUX_URL)]
    pub influx_url: String,

    /// InfluxDB database holding the bandwidth series
    #[arg(long, short = 'd', env = "INFLUX_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// InfluxDB username (enables basic auth)
    #[arg(long, short = 'u', env = "INFLUX_USERNAME")]
    pub username: Option<String>,

    /// InfluxDB password
    #[arg(long, env = "INFLUX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Timeout for each InfluxDB request (supports ms/s/m/h)
    #[arg(
        long,
        short = 't',
        default_value = DEFAULT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Path to config file (TOML/JSON). Defaults to ./quantile-checker.toml or ./quantile-checker.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,
}
