use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    #[error("input")]
    Input,
    #[error("output")]
    Output,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("No {series} bandwidth samples returned; cannot compute statistics.")]
    EmptySeries { series: SeriesKind },
    #[error("The {series} bandwidth series holds a non-finite sample ({value}) at position {index}.")]
    NonFiniteSample {
        series: SeriesKind,
        index: usize,
        value: f64,
    },
    #[error("The {statistic} is not representable as a finite number for these samples.")]
    NonFiniteStatistic { statistic: &'static str },
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
