// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod flags;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use text_stats_engine::stats::RunResult;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert parsed arguments and run the engine.
///
/// # Errors
/// Returns an error when the configuration is invalid or the engine aborts
/// the batch (strict mode, unusable output directory).
pub fn run(args: Args) -> Result<RunResult> {
    let config = Config::try_from(args)?;
    Ok(text_stats_engine::run(&config)?)
}

/// Install the stderr logger. `RUST_LOG` overrides the default `error` level.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .format_timestamp(None)
        .init();
}
