use std::io;
use thiserror::Error;

/// Every fatal condition of a run. The integration loop itself never fails, so
/// these can only come from the configuration, the input or the output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid input at line {line}: {message}")]
    Input { line: usize, message: String },

    #[error("invalid input: {0}")]
    InputFile(String),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("output error: {0}")]
    Output(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn input(line: usize, message: impl Into<String>) -> Error {
        Error::Input { line: line, message: message.into() }
    }

    pub fn io(path: impl Into<String>, source: io::Error) -> Error {
        Error::Io { path: path.into(), source: source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
