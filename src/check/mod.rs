//! One run of the check: query both series, compute, format.

use crate::args::{CheckArgs, Probability};
use crate::error::{AppResult, ValidationError};
use crate::query::{QuerySpec, build_query};
use crate::report::format_report;
use crate::source::SampleSource;
use crate::stats::compute_report;

/// Fee inputs accepted on the command line; reported in debug logs only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeSettings {
    pub max_bandwidth: Option<u64>,
    pub penalty: Option<f64>,
}

/// Selection and statistics settings for a run, resolved from CLI and config.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSettings {
    pub hostname: String,
    pub service: String,
    pub measurement: String,
    pub input_metric: String,
    pub output_metric: String,
    pub quantile: Probability,
    pub fees: FeeSettings,
}

impl CheckSettings {
    /// Resolves the settings once config values have been merged into `args`.
    ///
    /// # Errors
    ///
    /// Returns an error when hostname, service or measurement is missing or
    /// empty.
    pub fn from_args(args: &CheckArgs) -> Result<Self, ValidationError> {
        Ok(Self {
            hostname: required(args.hostname.as_deref(), "hostname")?,
            service: required(args.service.as_deref(), "service")?,
            measurement: required(args.measurement.as_deref(), "measurement")?,
            input_metric: required(Some(args.input_metric.as_str()), "in")?,
            output_metric: required(Some(args.output_metric.as_str()), "out")?,
            quantile: args.quantile,
            fees: FeeSettings {
                max_bandwidth: args.max_bandwidth,
                penalty: args.penalty,
            },
        })
    }

    fn query_spec(&self, metric: &str) -> Result<QuerySpec, ValidationError> {
        QuerySpec::new(&self.hostname, &self.service, &self.measurement, metric)
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { field }),
        Some(value) if value.trim().is_empty() => Err(ValidationError::EmptyField { field }),
        Some(value) => Ok(value.to_owned()),
    }
}

/// Fetches the input then the output series and returns the report line.
///
/// # Errors
///
/// Returns an error when a query cannot be built, a fetch fails, or the
/// samples cannot be summarised.
pub async fn run_check<S>(settings: &CheckSettings, source: &S) -> AppResult<String>
where
    S: SampleSource + ?Sized,
{
    tracing::debug!(
        "Fee settings (not evaluated): max={:?}, penalty={:?}",
        settings.fees.max_bandwidth,
        settings.fees.penalty
    );

    let input_query = build_query(&settings.query_spec(&settings.input_metric)?);
    let output_query = build_query(&settings.query_spec(&settings.output_metric)?);

    tracing::info!("Fetching input samples: {}", input_query);
    let input = source.fetch(&input_query).await?;
    tracing::info!("Fetched {} input samples", input.len());

    tracing::info!("Fetching output samples: {}", output_query);
    let output = source.fetch(&output_query).await?;
    tracing::info!("Fetched {} output samples", output.len());

    let metrics = compute_report(&input, &output, settings.quantile)?;
    tracing::info!(
        "Computed quantile {} at p={} over {} samples",
        metrics.quantile,
        settings.quantile.get(),
        input.len().saturating_add(output.len())
    );

    Ok(format_report(&metrics, settings.quantile))
}
