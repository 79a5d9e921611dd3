use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Could not open '{path}': {source}")]
    FileOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report '{path}': {source}")]
    ReportWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report '{path}' for '{input}' would overwrite the report of '{previous}'")]
    ReportCollision {
        path: std::path::PathBuf,
        input: std::path::PathBuf,
        previous: std::path::PathBuf,
    },

    #[error("Malformed report: {0}")]
    ReportParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether the input file itself could not be opened.
    #[must_use]
    pub const fn is_open_failure(&self) -> bool {
        matches!(self, Self::FileOpen { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
