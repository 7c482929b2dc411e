use arubacheck_common::transport::TransportError;
use thiserror::Error;

/// Failures that end a run. Missing optional columns never show up here.
#[derive(Debug, Error, PartialEq)]
pub enum ProbeError {
    #[error("device did not respond within the configured timeout")]
    Timeout,
    #[error("{count} devices match '{filter}', expected exactly one")]
    AmbiguousResult { filter: String, count: usize },
    #[error("no device matches '{0}'")]
    DeviceNotFound(String),
    #[error("unknown profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },
    #[error("column map has no address for key field '{0}'")]
    MissingKeyColumn(String),
    #[error(transparent)]
    Transport(TransportError),
}

impl From<TransportError> for ProbeError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout => ProbeError::Timeout,
            other => ProbeError::Transport(other),
        }
    }
}
