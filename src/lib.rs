//! Core library for the `quantile-checker` monitoring plugin.
//!
//! The plugin reads the input and output bandwidth series of a host service
//! from InfluxDB, computes the combined quantile and a few per-series
//! aggregates, and prints them as a single line of performance data. The
//! library exposes the building blocks used by the binary: CLI argument
//! types, configuration loading, query construction, the sample source, the
//! statistics engine and the report formatter.
pub mod args;
pub mod check;
pub mod config;
pub mod error;
pub mod logger;
pub mod query;
pub mod report;
pub mod source;
pub mod stats;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
