mod app;
mod config;
mod load;
mod report;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use load::LoadError;
pub use report::ReportError;
