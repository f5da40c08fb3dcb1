use alumina::core::io::hin::HinError;
use alumina::core::models::error::ModelError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: HinError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{failed} of {total} file(s) failed validation")]
    Validation { failed: usize, total: usize },

    #[error("Invalid orbital: {0}")]
    Orbital(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
