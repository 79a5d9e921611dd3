// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] text_stats_engine::error::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] text_stats_engine::config::ConfigBuilderError),
}

pub type Result<T> = std::result::Result<T, AppError>;
