use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::SampleSource;
use crate::args::{CheckArgs, DEFAULT_USER_AGENT};
use crate::error::DataSourceError;
use crate::query::Query;
use crate::stats::SampleSeries;

const QUERY_PATH: &str = "query";
const VALUE_COLUMN: &str = "value";
/// Timestamps are requested as epoch milliseconds; they are never read.
const EPOCH_PRECISION: &str = "ms";

/// Connection settings for the InfluxDB 1.x HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluxSettings {
    pub url: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl From<&CheckArgs> for InfluxSettings {
    fn from(args: &CheckArgs) -> Self {
        Self {
            url: args.influx_url.clone(),
            database: args.database.clone(),
            username: args.username.clone(),
            password: args.password.clone(),
            timeout: args.timeout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InfluxSource {
    client: Client,
    endpoint: Url,
    database: String,
    username: Option<String>,
    password: Option<String>,
}

impl InfluxSource {
    /// Builds a client for the `/query` endpoint under `settings.url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid or not http(s), or when the
    /// HTTP client cannot be built.
    pub fn new(settings: &InfluxSettings) -> Result<Self, DataSourceError> {
        let endpoint = query_endpoint(&settings.url)?;
        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|source| DataSourceError::BuildClient { source })?;

        Ok(Self {
            client,
            endpoint,
            database: settings.database.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SampleSource for InfluxSource {
    async fn fetch(&self, query: &Query) -> Result<SampleSeries, DataSourceError> {
        let params = encode_params(query)?;
        let statement = query.statement();
        tracing::debug!("Querying {} (db {}): {}", self.endpoint, self.database, query);

        let mut request = self.client.get(self.endpoint.clone()).query(&[
            ("db", self.database.as_str()),
            ("q", statement.as_str()),
            ("params", params.as_str()),
            ("epoch", EPOCH_PRECISION),
        ]);
        if let Some(username) = self.username.as_deref() {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request
            .send()
            .await
            .map_err(|source| DataSourceError::Request {
                url: self.endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| DataSourceError::ReadBody { source })?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        let samples = decode_response(&body)?;
        tracing::debug!("Received {} samples", samples.len());
        Ok(samples)
    }
}

fn query_endpoint(raw: &str) -> Result<Url, DataSourceError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| DataSourceError::InvalidEndpoint {
        url: raw.to_owned(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DataSourceError::UnsupportedScheme {
            url: raw.to_owned(),
        });
    }
    let path = format!("{}/{}", url.path().trim_end_matches('/'), QUERY_PATH);
    url.set_path(&path);
    url.set_query(None);
    Ok(url)
}

fn encode_params(query: &Query) -> Result<String, DataSourceError> {
    let params: serde_json::Map<String, Value> = query
        .params()
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    serde_json::to_string(&params).map_err(|source| DataSourceError::EncodeParams { source })
}

fn status_error(status: u16, body: &str) -> DataSourceError {
    if let Ok(QueryResponse {
        error: Some(message),
        ..
    }) = serde_json::from_str::<QueryResponse>(body)
    {
        return DataSourceError::Query { message };
    }
    DataSourceError::Status {
        status,
        body: body.trim().to_owned(),
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    series: Vec<ResultSeries>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultSeries {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Extracts the `value` column from an InfluxDB `/query` JSON body.
///
/// Rows are concatenated across statements and series in response order;
/// null values are skipped. A body without any series yields an empty
/// series.
///
/// # Errors
///
/// Returns an error when the body is not valid JSON, carries an InfluxDB
/// error, lacks a `value` column, or holds a non-numeric value.
pub fn decode_response(body: &str) -> Result<SampleSeries, DataSourceError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|source| DataSourceError::Decode { source })?;
    if let Some(message) = response.error {
        return Err(DataSourceError::Query { message });
    }

    let mut samples = Vec::new();
    for statement in response.results {
        if let Some(message) = statement.error {
            return Err(DataSourceError::Query { message });
        }
        for series in statement.series {
            let column = series
                .columns
                .iter()
                .position(|name| name == VALUE_COLUMN)
                .ok_or_else(|| DataSourceError::MissingValueColumn {
                    columns: series.columns.join(", "),
                })?;
            for row in &series.values {
                match row.get(column) {
                    None | Some(Value::Null) => {}
                    Some(value) => samples.push(numeric(value)?),
                }
            }
        }
    }
    Ok(SampleSeries::from(samples))
}

fn numeric(value: &Value) -> Result<f64, DataSourceError> {
    value
        .as_f64()
        .ok_or_else(|| DataSourceError::NonNumericValue {
            value: value.to_string(),
        })
}
