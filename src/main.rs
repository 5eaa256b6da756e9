mod app;
mod args;
mod charts;
mod config;
mod entry;
mod error;
mod loader;
mod logger;
mod metrics;
mod report;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
