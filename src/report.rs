//! Plugin output line: a summary sentence followed by performance data.
use crate::args::Probability;
use crate::stats::ReportMetrics;

/// Separates the summary from the performance data.
pub const PERFDATA_SEPARATOR: &str = " | ";
const FIELD_SEPARATOR: &str = ", ";

/// Labelled `95th` whatever quantile was requested.
const QUANTILE_KEY: &str = "bandwith_stats_95th";
const MAX_KEY: &str = "bandwith_stats_max";
const INPUT_KEY: &str = "bandwith_stats_in";
const OUTPUT_KEY: &str = "bandwith_stats_out";
const BURST_KEY: &str = "bandwith_stats_burst";
const PRECISION_KEY: &str = "bandwith_stats_precision";

/// Formats the single result line, without a trailing newline.
#[must_use]
pub fn format_report(metrics: &ReportMetrics, probability: Probability) -> String {
    let summary = format!(
        "Il {:.2}th percentile calcolato e' {}",
        probability.get(),
        metrics.quantile
    );
    let fields = [
        format!("{}={}", QUANTILE_KEY, metrics.quantile),
        format!("{}={}", MAX_KEY, metrics.max),
        format!("{}={}", INPUT_KEY, metrics.input_mean),
        format!("{}={}", OUTPUT_KEY, metrics.output_mean),
        format!("{}={}", BURST_KEY, metrics.burst),
        format!("{}={:.2}%", PRECISION_KEY, metrics.precision),
    ];

    format!(
        "{}{}{}",
        summary,
        PERFDATA_SEPARATOR,
        fields.join(FIELD_SEPARATOR)
    )
}
