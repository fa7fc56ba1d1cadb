use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{CheckArgs, Probability};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, InfluxConfig};

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through an environment variable win
/// over the config file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut CheckArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "hostname")
        && let Some(hostname) = config.hostname.clone()
    {
        args.hostname = Some(hostname);
    }

    if !is_explicit(matches, "service")
        && let Some(service) = config.service.clone()
    {
        args.service = Some(service);
    }

    if !is_explicit(matches, "measurement")
        && let Some(measurement) = config.measurement.clone()
    {
        args.measurement = Some(measurement);
    }

    if !is_explicit(matches, "input_metric")
        && let Some(metric) = config.input_metric.clone()
    {
        args.input_metric = metric;
    }

    if !is_explicit(matches, "output_metric")
        && let Some(metric) = config.output_metric.clone()
    {
        args.output_metric = metric;
    }

    if !is_explicit(matches, "max_bandwidth")
        && let Some(max) = config.max
    {
        args.max_bandwidth = Some(max);
    }

    if !is_explicit(matches, "penalty")
        && let Some(penalty) = config.penalty
    {
        args.penalty = Some(penalty);
    }

    if !is_explicit(matches, "quantile")
        && let Some(quantile) = config.quantile
    {
        args.quantile = Probability::try_from(quantile).map_err(|err| {
            AppError::config(ConfigError::InvalidValue {
                field: "quantile",
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "verbosity")
        && let Some(verbosity) = config.verbosity
    {
        args.verbosity = verbosity;
    }

    if let Some(influx) = config.influx.as_ref() {
        apply_influx(args, matches, influx)?;
    }

    Ok(())
}

fn apply_influx(args: &mut CheckArgs, matches: &ArgMatches, influx: &InfluxConfig) -> AppResult<()> {
    if !is_explicit(matches, "influx_url")
        && let Some(url) = influx.url.clone()
    {
        args.influx_url = url;
    }

    if !is_explicit(matches, "database")
        && let Some(database) = influx.database.clone()
    {
        args.database = database;
    }

    if !is_explicit(matches, "username")
        && let Some(username) = influx.username.clone()
    {
        args.username = Some(username);
    }

    if !is_explicit(matches, "password")
        && let Some(password) = influx.password.clone()
    {
        args.password = Some(password);
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = influx.timeout.as_ref()
    {
        args.timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidValue {
                field: "influx.timeout",
                source: err,
            })
        })?;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
