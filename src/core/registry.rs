use crate::core::errors::SettleError;
use crate::core::models::Participant;
use serde::{Deserialize, Serialize};

/// Ordered set of unique participants.
///
/// A registry is a value: every mutation returns a new version and leaves the
/// receiver untouched. The owner swaps in the new version.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    version: u64,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from raw names, dropping blanks and later duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut participants: Vec<Participant> = Vec::new();
        for name in names {
            if let Ok(participant) = Participant::parse(name.as_ref()) {
                if !participants.contains(&participant) {
                    participants.push(participant);
                }
            }
        }
        ParticipantRegistry {
            participants,
            version: 0,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.to_string()).collect()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.participants.contains(participant)
    }

    pub fn with_added(&self, raw: &str) -> Result<Self, SettleError> {
        let participant = Participant::parse(raw)?;
        if self.contains(&participant) {
            return Err(SettleError::DuplicateParticipant(participant.to_string()));
        }
        let mut participants = self.participants.clone();
        participants.push(participant);
        Ok(self.next(participants))
    }

    /// Removes the exact match. Returns `None` when nothing matched.
    pub fn with_removed(&self, name: &str) -> Option<Self> {
        let index = self.participants.iter().position(|p| *p == name)?;
        let mut participants = self.participants.clone();
        participants.remove(index);
        Some(self.next(participants))
    }

    pub fn with_replaced<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fresh = Self::from_names(names);
        self.next(fresh.participants)
    }

    fn next(&self, participants: Vec<Participant>) -> Self {
        ParticipantRegistry {
            participants,
            version: self.version + 1,
        }
    }
}
