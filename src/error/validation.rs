use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required value for --{field} (set it on the command line or in the config file).")]
    MissingField { field: &'static str },
    #[error("--{field} must not be empty.")]
    EmptyField { field: &'static str },
    #[error("Invalid quantile '{value}': {source}")]
    InvalidProbability {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Quantile must be within [0, 1], got {value}.")]
    ProbabilityOutOfRange { value: f64 },
    #[error("Invalid verbosity {value}. Use 0 or 1.")]
    InvalidVerbosity { value: u8 },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
