/// Error types for the calculator front end

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to access program file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid program in {path}: {source}")]
    Program {
        path: PathBuf,
        #[source]
        source: calculator_brain::Error,
    },

    #[error("Failed to encode program: {0}")]
    Encode(#[from] calculator_brain::Error),

    #[error("Display does not hold a number: {text:?}")]
    InvalidDisplay {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
