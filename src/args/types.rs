use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ValidationError;

/// Quantile probability, finite and within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probability(f64);

impl Probability {
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(ValidationError::ProbabilityOutOfRange { value })
        }
    }
}

impl std::str::FromStr for Probability {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidProbability {
                value: s.to_owned(),
                source: err,
            })?;
        Probability::try_from(value)
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.get()
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8")]
pub enum Verbosity {
    #[default]
    #[value(name = "0")]
    Quiet,
    #[value(name = "1")]
    Info,
}

impl Verbosity {
    /// Filter directive used when no log environment variable is set.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Info => "info",
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verbosity::Quiet),
            1 => Ok(Verbosity::Info),
            _ => Err(ValidationError::InvalidVerbosity { value }),
        }
    }
}
