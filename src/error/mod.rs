mod app;
mod config;
mod data;
mod source;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use data::{DataError, SeriesKind};
pub use source::DataSourceError;
pub use validation::ValidationError;
