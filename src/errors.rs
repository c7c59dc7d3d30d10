use std::num::ParseFloatError;
use std::string::FromUtf8Error;

use thiserror::Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The document uses a feature (e.g. several top-level paths) which is
    /// not handled.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
    /// Missing or unparseable view box, bad path data, missing path etc.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Removing the outer shape left nothing to draw.
    #[error("No shapes remain after removing the outer shape")]
    EmptyResult,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Low-level XML errors
    #[error("Document error: {0}")]
    Document(String),
    #[error("Editor error: {0}")]
    Editor(String),
    #[error("CLI error: {0}")]
    Cli(String),
    #[error("Failed to process: {}", .0.join(", "))]
    Batch(Vec<String>),
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// Whether this error is a property of the input document, as opposed to
    /// an environmental failure (IO, editor process, ...)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedInput(_) | Error::MalformedInput(_) | Error::EmptyResult
        )
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::MalformedInput(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Document(format!("utf8: {err}"))
    }
}
