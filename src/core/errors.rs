use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum SettleError {
    /// Participant name is empty after trimming
    #[error("Participant name is required")]
    EmptyParticipantName,

    /// Participant is already in the registry
    #[error("Participant {0} already exists")]
    DuplicateParticipant(String),

    /// Round title edit is empty after trimming
    #[error("Round title cannot be empty")]
    EmptyRoundTitle,

    /// Round with given ID not found in the session
    #[error("Round {0} not found")]
    RoundNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Stored value decoded but is not a list of names
    #[error("Invalid stored value: {0}")]
    InvalidStoredValue(String),

    #[error("Capture error: {0}")]
    CaptureError(String),

    /// Capture or hand-off to the share target failed
    #[error("Share failed: {0}")]
    ShareFailed(String),
}

impl From<serde_json::Error> for SettleError {
    fn from(err: serde_json::Error) -> Self {
        SettleError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for SettleError {
    fn from(err: std::io::Error) -> Self {
        SettleError::StorageError(err.to_string())
    }
}
