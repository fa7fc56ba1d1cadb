//! Statistics over the input and output bandwidth samples.
use crate::args::Probability;
use crate::error::{DataError, SeriesKind};

/// Reported as-is on every run; not derived from the samples.
pub const BURST_INDICATOR: u8 = 1;

/// Ordered samples returned for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries(Vec<f64>);

impl SampleSeries {
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for SampleSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportMetrics {
    /// Quantile of the combined input and output samples.
    pub quantile: f64,
    pub max: f64,
    pub input_mean: f64,
    pub output_mean: f64,
    pub burst: u8,
    /// Population variance of the input plus that of the output.
    pub precision: f64,
}

/// Computes the report for one run.
///
/// # Errors
///
/// Returns an error when either series is empty or holds a NaN or infinite
/// sample, or when a statistic overflows the `f64` range.
pub fn compute_report(
    input: &SampleSeries,
    output: &SampleSeries,
    probability: Probability,
) -> Result<ReportMetrics, DataError> {
    let input_summary = Summary::of(input, SeriesKind::Input)?;
    let output_summary = Summary::of(output, SeriesKind::Output)?;

    let mut combined: Vec<f64> = input
        .values()
        .iter()
        .chain(output.values())
        .copied()
        .collect();
    combined.sort_by(f64::total_cmp);
    let max = input_summary.max.max(output_summary.max);

    let metrics = ReportMetrics {
        quantile: interpolated_quantile(&combined, probability, max),
        max,
        input_mean: input_summary.mean,
        output_mean: output_summary.mean,
        burst: BURST_INDICATOR,
        precision: input_summary.variance + output_summary.variance,
    };
    ensure_finite(&metrics)?;
    Ok(metrics)
}

fn ensure_finite(metrics: &ReportMetrics) -> Result<(), DataError> {
    let statistics = [
        ("quantile", metrics.quantile),
        ("maximum", metrics.max),
        ("input mean", metrics.input_mean),
        ("output mean", metrics.output_mean),
        ("precision", metrics.precision),
    ];
    match statistics.iter().find(|(_, value)| !value.is_finite()) {
        Some((statistic, _)) => Err(DataError::NonFiniteStatistic {
            statistic: *statistic,
        }),
        None => Ok(()),
    }
}

/// Per-series aggregates, accumulated in sample order.
struct Summary {
    mean: f64,
    variance: f64,
    max: f64,
}

impl Summary {
    fn of(series: &SampleSeries, kind: SeriesKind) -> Result<Self, DataError> {
        let values = series.values();
        if values.is_empty() {
            return Err(DataError::EmptySeries { series: kind });
        }
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(DataError::NonFiniteSample {
                series: kind,
                index,
                value: *value,
            });
        }

        let count = values.len() as f64;
        let mean = mean(values, count);
        let variance = population_variance(values, mean, count);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean,
            variance,
            max,
        })
    }
}

/// Largest absolute sample; the divisor for the overflow-free sums.
fn magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()))
}

fn mean(values: &[f64], count: f64) -> f64 {
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return sum / count;
    }
    let scale = magnitude(values);
    values.iter().map(|value| value / scale).sum::<f64>() / count * scale
}

/// Infinite only when the variance itself exceeds `f64::MAX`.
fn population_variance(values: &[f64], mean: f64, count: f64) -> f64 {
    let squares = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>();
    if squares.is_finite() {
        return squares / count;
    }
    let scale = magnitude(values);
    let scaled_mean = mean / scale;
    let scaled = values
        .iter()
        .map(|value| {
            let delta = value / scale - scaled_mean;
            delta * delta
        })
        .sum::<f64>()
        / count;
    scaled * scale * scale
}

/// Linear interpolation between the order statistics surrounding
/// `p * (n - 1)`, kept within that bracket. `sorted` must be in ascending
/// order; positions past its end clamp to `max`.
fn interpolated_quantile(sorted: &[f64], probability: Probability, max: f64) -> f64 {
    let last = sorted.len().saturating_sub(1);
    let position = probability.get() * last as f64;
    let lower = position.floor();
    let fraction = position - lower;
    let lower_index = lower as usize;

    let lower_value = sorted.get(lower_index).copied().unwrap_or(max);
    let upper_value = sorted
        .get(lower_index.saturating_add(1))
        .copied()
        .unwrap_or(lower_value);
    (lower_value * (1.0 - fraction) + upper_value * fraction)
        .max(lower_value)
        .min(upper_value)
}
