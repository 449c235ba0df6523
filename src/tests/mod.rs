mod registry_tests;
mod session_tests;

use crate::core::errors::SettleError;
use crate::core::models::Participant;
use crate::core::registry::ParticipantRegistry;
use crate::infrastructure::storage::KeyValueStore;
use async_trait::async_trait;

pub fn participants(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| participant(n)).collect()
}

pub fn participant(name: &str) -> Participant {
    Participant::parse(name).expect("valid participant")
}

pub fn registry(names: &[&str]) -> ParticipantRegistry {
    ParticipantRegistry::from_names(names)
}

/// Store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, SettleError> {
        Err(SettleError::StorageError("disk unavailable".to_string()))
    }

    async fn set_item(&self, _key: &str, _value: String) -> Result<(), SettleError> {
        Err(SettleError::StorageError("disk unavailable".to_string()))
    }
}
