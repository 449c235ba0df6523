use crate::core::errors::SettleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named individual who can be charged in one or more rounds.
///
/// Names are trimmed on construction and compared case-sensitively.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn parse(raw: &str) -> Result<Self, SettleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SettleError::EmptyParticipantName);
        }
        Ok(Participant(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Participant {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Participant {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
