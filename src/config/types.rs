use std::time::Duration;

use serde::Deserialize;

use crate::args::Verbosity;
use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub hostname: Option<String>,
    pub service: Option<String>,
    pub measurement: Option<String>,
    #[serde(rename = "in", alias = "input")]
    pub input_metric: Option<String>,
    #[serde(rename = "out", alias = "output")]
    pub output_metric: Option<String>,
    pub max: Option<u64>,
    pub penalty: Option<f64>,
    pub quantile: Option<f64>,
    pub verbosity: Option<Verbosity>,
    pub influx: Option<InfluxConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InfluxConfig {
    pub url: Option<String>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Option<DurationValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
