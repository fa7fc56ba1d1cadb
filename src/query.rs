//! InfluxQL statements selecting one bandwidth metric of a host service.
//!
//! Tag values never end up inside the statement text: they are carried as
//! bind parameters and resolved by InfluxDB. The measurement cannot be bound,
//! so it is emitted as an escaped, double-quoted identifier.
use std::fmt;
use std::time::Duration;

use crate::error::ValidationError;

/// Time range every query looks back over.
pub const LOOKBACK_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

const VALUE_FIELD: &str = "value";
const HOSTNAME_TAG: &str = "hostname";
const SERVICE_TAG: &str = "service";
const METRIC_TAG: &str = "metric";

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    hostname: String,
    service: String,
    measurement: String,
    metric: String,
    lookback: Duration,
}

impl QuerySpec {
    /// Builds the selection for one metric over [`LOOKBACK_WINDOW`].
    ///
    /// # Errors
    ///
    /// Returns an error when any of the values is empty or whitespace only.
    pub fn new(
        hostname: &str,
        service: &str,
        measurement: &str,
        metric: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            hostname: non_empty(hostname, "hostname")?,
            service: non_empty(service, "service")?,
            measurement: non_empty(measurement, "measurement")?,
            metric: non_empty(metric, "metric")?,
            lookback: LOOKBACK_WINDOW,
        })
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    #[must_use]
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    #[must_use]
    pub const fn lookback(&self) -> Duration {
        self.lookback
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_owned())
}

/// A parameterised InfluxQL statement.
///
/// `Display` renders the equivalent statement with the parameters inlined as
/// escaped string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    measurement: String,
    window: String,
    params: Vec<(String, String)>,
}

impl Query {
    /// Statement text with `$name` placeholders for every tag predicate.
    #[must_use]
    pub fn statement(&self) -> String {
        self.render(|name, _| format!("${}", name))
    }

    /// Bind parameters in predicate order.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    fn render<F>(&self, bind: F) -> String
    where
        F: Fn(&str, &str) -> String,
    {
        let mut clauses: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| format!("{} = {}", quote_identifier(name), bind(name, value)))
            .collect();
        clauses.push(format!("time > now() - {}", self.window));

        format!(
            "SELECT {} FROM {} WHERE {}",
            quote_identifier(VALUE_FIELD),
            self.measurement,
            clauses.join(" AND ")
        )
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, value| quote_literal(value)))
    }
}

/// Builds the statement selecting `value` for the metric described by `spec`.
#[must_use]
pub fn build_query(spec: &QuerySpec) -> Query {
    let params = [
        (HOSTNAME_TAG, spec.hostname()),
        (SERVICE_TAG, spec.service()),
        (METRIC_TAG, spec.metric()),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_owned(), value.to_owned()))
    .collect();

    Query {
        measurement: quote_identifier(spec.measurement()),
        window: duration_literal(spec.lookback()),
        params,
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", escape(name, '"'))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", escape(value, '\''))
}

fn escape(value: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\\' || ch == quote {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// InfluxQL duration literal in the largest whole unit.
fn duration_literal(duration: Duration) -> String {
    let secs = duration.as_secs();
    if duration.subsec_millis() != 0 {
        return format!("{}ms", duration.as_millis());
    }
    if secs != 0 && secs % SECS_PER_HOUR == 0 {
        return format!("{}h", secs / SECS_PER_HOUR);
    }
    if secs != 0 && secs % SECS_PER_MINUTE == 0 {
        return format!("{}m", secs / SECS_PER_MINUTE);
    }
    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    fn spec(metric: &str) -> AppResult<QuerySpec> {
        Ok(QuerySpec::new("web01", "eth0", "net", metric)?)
    }

    #[test]
    fn statement_binds_tag_values() -> AppResult<()> {
        let query = build_query(&spec("inBandwith")?);
        let expected = "SELECT \"value\" FROM \"net\" WHERE \"hostname\" = $hostname AND \
\"service\" = $service AND \"metric\" = $metric AND time > now() - 24h";
        if query.statement() != expected {
            return Err(AppError::validation(format!(
                "Unexpected statement: {}",
                query.statement()
            )));
        }
        let params: Vec<(&str, &str)> = query
            .params()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        if params
            != [
                ("hostname", "web01"),
                ("service", "eth0"),
                ("metric", "inBandwith"),
            ]
        {
            return Err(AppError::validation(format!(
                "Unexpected params: {:?}",
                params
            )));
        }
        Ok(())
    }

    #[test]
    fn rendered_query_inlines_every_selection_value() -> AppResult<()> {
        let rendered = build_query(&spec("outBandwith")?).to_string();
        let expected = "SELECT \"value\" FROM \"net\" WHERE \"hostname\" = 'web01' AND \
\"service\" = 'eth0' AND \"metric\" = 'outBandwith' AND time > now() - 24h";
        if rendered != expected {
            return Err(AppError::validation(format!(
                "Unexpected rendering: {}",
                rendered
            )));
        }
        Ok(())
    }

    #[test]
    fn identical_specs_build_identical_queries() -> AppResult<()> {
        let first = build_query(&spec("inBandwith")?);
        let second = build_query(&spec("inBandwith")?);
        if first != second || first.to_string() != second.to_string() {
            return Err(AppError::validation("Expected deterministic query"));
        }
        Ok(())
    }

    #[test]
    fn quotes_are_escaped() -> AppResult<()> {
        let spec = QuerySpec::new("web'01", "eth\\0", "net\"x", "in' OR '1'='1")?;
        let query = build_query(&spec);
        let statement = query.statement();
        if !statement.contains("FROM \"net\\\"x\"") {
            return Err(AppError::validation(format!(
                "Measurement not escaped: {}",
                statement
            )));
        }
        if statement.contains("OR") {
            return Err(AppError::validation("Tag value leaked into statement"));
        }
        let rendered = query.to_string();
        let checks = [
            "\"hostname\" = 'web\\'01'",
            "\"service\" = 'eth\\\\0'",
            "\"metric\" = 'in\\' OR \\'1\\'=\\'1'",
        ];
        for check in checks {
            if !rendered.contains(check) {
                return Err(AppError::validation(format!(
                    "Missing '{}' in {}",
                    check, rendered
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn empty_fields_are_rejected() -> AppResult<()> {
        match QuerySpec::new("web01", " ", "net", "inBandwith") {
            Err(ValidationError::EmptyField { field: "service" }) => Ok(()),
            Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
            Ok(_) => Err(AppError::validation("Expected empty service to fail")),
        }
    }

    #[test]
    fn lookback_is_one_day() -> AppResult<()> {
        if spec("inBandwith")?.lookback() != Duration::from_secs(86_400) {
            return Err(AppError::validation("Unexpected lookback"));
        }
        Ok(())
    }

    #[test]
    fn duration_literals_use_the_largest_unit() -> AppResult<()> {
        let cases = [
            (Duration::from_secs(86_400), "24h"),
            (Duration::from_secs(90 * 60), "90m"),
            (Duration::from_secs(45), "45s"),
            (Duration::from_millis(1500), "1500ms"),
        ];
        for (duration, expected) in cases {
            let literal = duration_literal(duration);
            if literal != expected {
                return Err(AppError::validation(format!(
                    "Unexpected literal for {:?}: {}",
                    duration, literal
                )));
            }
        }
        Ok(())
    }
}
