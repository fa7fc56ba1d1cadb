use super::{apply_config, load_config, load_config_file, parse_config, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{CheckArgs, Verbosity};
use crate::error::{AppError, ConfigError};

fn parse_with_matches(raw: &[&str]) -> Result<(CheckArgs, clap::ArgMatches), String> {
    let matches = CheckArgs::command()
        .try_get_matches_from(raw.iter().copied())
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = CheckArgs::from_arg_matches(&matches).map_err(|err| format!("args failed: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config_with_influx_section() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("quantile-checker.toml");
    let content = r#"
hostname = "web01"
service = "eth0"
measurement = "net"
in = "rx"
out = "tx"
quantile = 0.9
max = 1000
penalty = 12.5
verbosity = 1

[influx]
url = "http://influx:8086"
database = "metrics"
username = "reader"
password = "secret"
timeout = "5s"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.hostname.as_deref() != Some("web01") {
        return Err("Unexpected hostname".to_owned());
    }
    if config.input_metric.as_deref() != Some("rx") || config.output_metric.as_deref() != Some("tx")
    {
        return Err("Unexpected metric names".to_owned());
    }
    if config.verbosity != Some(Verbosity::Info) {
        return Err("Unexpected verbosity".to_owned());
    }
    let influx = match config.influx {
        Some(influx) => influx,
        None => return Err("Expected influx section".to_owned()),
    };
    if influx.database.as_deref() != Some("metrics") {
        return Err("Unexpected database".to_owned());
    }
    let timeout = match influx.timeout {
        Some(timeout) => timeout.to_duration().map_err(|err| err.to_string())?,
        None => return Err("Expected timeout".to_owned()),
    };
    if timeout != Duration::from_secs(5) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }

    Ok(())
}

#[test]
fn parse_json_config_with_numeric_timeout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("quantile-checker.json");
    let content = r#"{
  "hostname": "web01",
  "measurement": "net",
  "input": "rx",
  "influx": { "url": "http://influx:8086", "timeout": 3 }
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config(path.to_str()).map_err(|err| err.to_string())?;
    let config = match config {
        Some(config) => config,
        None => return Err("Expected config".to_owned()),
    };
    if config.input_metric.as_deref() != Some("rx") {
        return Err("Expected 'input' alias to fill input metric".to_owned());
    }
    let timeout = config
        .influx
        .and_then(|influx| influx.timeout)
        .map(|value| value.to_duration());
    match timeout {
        Some(Ok(duration)) if duration == Duration::from_secs(3) => Ok(()),
        other => Err(format!("Unexpected timeout: {:?}", other)),
    }
}

#[test]
fn config_rejects_unknown_extension() -> Result<(), String> {
    match parse_config(Path::new("check.yaml"), "hostname: web01") {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_| ()))),
    }
}

#[test]
fn config_rejects_missing_extension() -> Result<(), String> {
    match parse_config(Path::new("check"), "") {
        Err(AppError::Config(ConfigError::MissingExtension)) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_| ()))),
    }
}

#[test]
fn config_rejects_invalid_verbosity() -> Result<(), String> {
    match parse_config(Path::new("check.toml"), "verbosity = 3") {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_| ()))),
    }
}

#[test]
fn missing_config_file_is_a_read_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.toml");
    match load_config(path.to_str()) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|_| ()))),
    }
}

#[test]
fn apply_config_fills_unset_values() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["quantile-checker", "-H", "cli-host"])?;
    let config = parse_config(
        Path::new("check.toml"),
        r#"
hostname = "config-host"
service = "eth0"
measurement = "net"
out = "tx"
quantile = 0.5
max = 200

[influx]
database = "metrics"
timeout = "1m"
"#,
    )
    .map_err(|err| err.to_string())?;

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.hostname.as_deref() != Some("cli-host") {
        return Err("CLI hostname should win over config".to_owned());
    }
    if args.service.as_deref() != Some("eth0") || args.measurement.as_deref() != Some("net") {
        return Err("Expected service and measurement from config".to_owned());
    }
    if args.input_metric != "inBandwith" || args.output_metric != "tx" {
        return Err("Unexpected metric names".to_owned());
    }
    if (args.quantile.get() - 0.5).abs() > f64::EPSILON {
        return Err("Expected quantile from config".to_owned());
    }
    if args.max_bandwidth != Some(200) {
        return Err("Expected max from config".to_owned());
    }
    if std::env::var("INFLUX_DATABASE").is_err() && args.database != "metrics" {
        return Err("Expected database from config".to_owned());
    }
    if args.timeout != Duration::from_secs(60) {
        return Err("Expected timeout from config".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_quantile() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["quantile-checker", "-q", "0.75"])?;
    let config = ConfigFile {
        quantile: Some(0.1),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;
    if (args.quantile.get() - 0.75).abs() > f64::EPSILON {
        return Err("CLI quantile should win over config".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_rejects_quantile_out_of_range() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["quantile-checker"])?;
    let config = ConfigFile {
        quantile: Some(95.0),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidValue { field, .. })) if field == "quantile" => {
            Ok(())
        }
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn apply_config_rejects_zero_timeout() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["quantile-checker"])?;
    let config = parse_config(Path::new("check.json"), r#"{ "influx": { "timeout": 0 } }"#)
        .map_err(|err| err.to_string())?;
    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidValue { field, .. }))
            if field == "influx.timeout" =>
        {
            Ok(())
        }
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}
