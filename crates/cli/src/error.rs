use std::error::Error;
use std::fmt::Display;

use opsboard_dashboard::error::PayloadError;
use opsboard_vis::error::VisError;

use crate::fetch::error::FetchError;

#[derive(Debug)]
pub(crate) enum CliError {
    Fetch(FetchError),
    Payload(PayloadError),
    Vis(VisError),
    Json(serde_json::Error),
    Path(String),
}

impl From<FetchError> for CliError {
    fn from(error: FetchError) -> Self {
        CliError::Fetch(error)
    }
}

impl From<PayloadError> for CliError {
    fn from(error: PayloadError) -> Self {
        CliError::Payload(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Json(error)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Fetch(error) => Some(error),
            CliError::Payload(error) => Some(error),
            CliError::Vis(error) => Some(error),
            CliError::Json(error) => Some(error),
            CliError::Path(_) => None,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Fetch(error) => write!(f, "{cli_error} {error}"),
            CliError::Payload(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Json(error) => write!(f, "{cli_error} printing JSON failed: {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
