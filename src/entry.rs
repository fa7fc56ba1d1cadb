use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches};

use quantile_checker::args::CheckArgs;
use quantile_checker::check::{CheckSettings, run_check};
use quantile_checker::config::{apply_config, load_config};
use quantile_checker::error::{AppError, AppResult};
use quantile_checker::logger::init_logging;
use quantile_checker::source::{InfluxSettings, InfluxSource};

pub(crate) fn run() -> ExitCode {
    match try_run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, T>(raw_args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some(args) = parse_args(raw_args)? else {
        return Ok(());
    };

    init_logging(args.verbosity);
    let settings = CheckSettings::from_args(&args).inspect_err(|err| {
        tracing::error!("{}", err);
    })?;
    let source = InfluxSource::new(&InfluxSettings::from(&args))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let line = runtime.block_on(run_check(&settings, &source))?;

    write_result(&mut std::io::stdout().lock(), &line)
}

/// Parses the command line and merges the config file into it.
/// Returns `None` once help or version output has been printed.
fn parse_args<I, T>(raw_args: I) -> AppResult<Option<CheckArgs>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match CheckArgs::command().try_get_matches_from(raw_args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let mut args = CheckArgs::from_arg_matches(&matches)?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    Ok(Some(args))
}

fn write_result<W: Write>(out: &mut W, line: &str) -> AppResult<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

fn report_error(err: &AppError) {
    if let AppError::Clap { source } = err {
        if source.print().is_err() {
            eprintln!("error: {}", source);
        }
        return;
    }
    eprintln!("error: {}", err);
}
