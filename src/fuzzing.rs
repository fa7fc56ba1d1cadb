use std::path::Path;
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{CheckArgs, Probability, parsers};
use crate::config::types::ConfigFile;
use crate::config::{apply_config, parse_config};
use crate::error::{AppError, AppResult};
use crate::query::{Query, QuerySpec, build_query};
use crate::report::format_report;
use crate::source::decode_response;
use crate::stats::{ReportMetrics, SampleSeries, compute_report};

thread_local! {
    static BASE_MATCHES: ArgMatches = CheckArgs::command().get_matches_from(["quantile-checker"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parsers::parse_duration_arg(input).map_err(AppError::from)
}

/// Parses a quantile probability.
///
/// # Errors
///
/// Returns an error when the value is not a number within `[0, 1]`.
pub fn parse_probability_input(input: &str) -> AppResult<Probability> {
    parsers::parse_probability(input).map_err(AppError::from)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<CheckArgs> {
    let config = parse_config(Path::new("fuzz.toml"), input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &str) -> AppResult<CheckArgs> {
    let config = parse_config(Path::new("fuzz.json"), input)?;
    apply_config_to_defaults(&config)
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<CheckArgs> {
    BASE_MATCHES.with(|matches| {
        let mut args = CheckArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)?;
        Ok(args)
    })
}

/// Decodes an InfluxDB `/query` response body.
///
/// # Errors
///
/// Returns an error when the body is not a valid numeric response.
pub fn decode_response_input(body: &str) -> AppResult<SampleSeries> {
    decode_response(body).map_err(AppError::from)
}

/// Builds the query for arbitrary selection values.
///
/// # Errors
///
/// Returns an error when a selection value is empty.
pub fn build_query_input(
    hostname: &str,
    service: &str,
    measurement: &str,
    metric: &str,
) -> AppResult<Query> {
    let spec = QuerySpec::new(hostname, service, measurement, metric)?;
    Ok(build_query(&spec))
}

/// Computes and formats the report for arbitrary samples.
///
/// # Errors
///
/// Returns an error when a series is empty or holds a non-finite sample.
pub fn report_input(
    input: &[f64],
    output: &[f64],
    probability: Probability,
) -> AppResult<(ReportMetrics, String)> {
    let metrics = compute_report(
        &SampleSeries::from(input.to_vec()),
        &SampleSeries::from(output.to_vec()),
        probability,
    )?;
    Ok((metrics, format_report(&metrics, probability)))
}
