//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// The result type that uses [PayloadError] as the error type.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// The error type for reading a dashboard payload.
///
/// Chart descriptors never produce errors; malformed chart data is tolerated
/// and surfaces later as a chart directive instead.
#[derive(Debug)]
pub enum PayloadError {
    /// A [`std::io::Error`] encountered while reading the payload.
    Io(io::Error),

    /// A [`serde_json::Error`] encountered while deserializing the payload.
    Json(serde_json::Error),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let payload_error = "payload error:";

        match self {
            PayloadError::Io(error) => write!(f, "{payload_error} I/O error: {error}"),
            PayloadError::Json(error) => {
                write!(f, "{payload_error} JSON deserialization error: {error}")
            }
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PayloadError::Io(error) => Some(error),
            PayloadError::Json(error) => Some(error),
        }
    }
}

impl From<io::Error> for PayloadError {
    fn from(error: io::Error) -> Self {
        PayloadError::Io(error)
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(error: serde_json::Error) -> Self {
        PayloadError::Json(error)
    }
}
