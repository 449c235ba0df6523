use crate::core::errors::SettleError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        };
        write!(f, "{}", s)
    }
}

/// Transient message for the toast/alert collaborator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl From<&SettleError> for Notice {
    fn from(err: &SettleError) -> Self {
        match err {
            SettleError::EmptyParticipantName => Notice::error("Enter a participant name."),
            SettleError::DuplicateParticipant(_) => Notice::error("That participant already exists."),
            SettleError::EmptyRoundTitle => Notice::info("Title unchanged."),
            SettleError::RoundNotFound(_) => Notice::error("That round no longer exists."),
            // Share and capture failures surface as a generic alert
            SettleError::CaptureError(_) | SettleError::ShareFailed(_) => {
                Notice::error("Failed to share the settlement.")
            }
            SettleError::StorageError(_)
            | SettleError::SerializationError(_)
            | SettleError::InvalidStoredValue(_) => Notice::error("Something went wrong."),
        }
    }
}
