//! Where bandwidth samples come from.
mod influx;


use async_trait::async_trait;

use crate::error::DataSourceError;
use crate::query::Query;
use crate::stats::SampleSeries;

pub use influx::{InfluxSettings, InfluxSource, decode_response};

/// Executes a query and returns the numeric samples in the order received.
#[async_trait]
pub trait SampleSource: Send + Sync {
    async fn fetch(&self, query: &Query) -> Result<SampleSeries, DataSourceError>;
}
