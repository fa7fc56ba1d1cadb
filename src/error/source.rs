use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Invalid InfluxDB URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("InfluxDB URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Failed to build InfluxDB client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to encode query parameters: {source}")]
    EncodeParams {
        #[source]
        source: serde_json::Error,
    },
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read InfluxDB response: {source}")]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },
    #[error("InfluxDB answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode InfluxDB response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
    #[error("InfluxDB rejected the query: {message}")]
    Query { message: String },
    #[error("InfluxDB series has no 'value' column (columns: {columns}).")]
    MissingValueColumn { columns: String },
    #[error("Non-numeric sample '{value}' in InfluxDB response.")]
    NonNumericValue { value: String },
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
