use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::args::Verbosity;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "QUANTILE_CHECKER_LOG";

/// Installs the global stderr subscriber. Stdout stays reserved for the
/// report line.
pub fn init_logging(verbosity: Verbosity) {
    let fallback = verbosity.filter_directive();
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(fallback),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(fallback)),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Info);
    }
}
