use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("invalid CONTENT_LENGTH {value:?}")]
    InvalidContentLength {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request body is not valid UTF-8")]
    BodyEncoding(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ResponderError {
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResponderError>;
