/// Metric names as written by existing deployments; the spelling is part of
/// the contract with the collectors.
pub const DEFAULT_INPUT_METRIC: &str = "inBandwith";
pub const DEFAULT_OUTPUT_METRIC: &str = "outBandwith";

pub const DEFAULT_QUANTILE: &str = "0.95";

pub const DEFAULT_INFLUX_URL: &str = "http://localhost:8086";
/// Database the icinga2 InfluxDB writer fills by default.
pub const DEFAULT_DATABASE: &str = "icinga2";
pub const DEFAULT_TIMEOUT: &str = "10s";

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("quantile-checker/", env!("CARGO_PKG_VERSION"));
