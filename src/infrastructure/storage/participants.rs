use crate::core::errors::SettleError;
use crate::infrastructure::storage::KeyValueStore;
use crate::infrastructure::storage::storage_keys::participants_key;
use log::warn;
use serde_json::Value;

/// JSON encoding of the participant list under the fixed key.
pub struct ParticipantRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ParticipantRepository<S> {
    pub fn new(store: S) -> Self {
        ParticipantRepository { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored names. A missing key is an empty list; anything that is not a
    /// JSON array is an error. Non-string array entries are skipped.
    pub async fn try_load(&self) -> Result<Vec<String>, SettleError> {
        let Some(raw) = self.store.get_item(participants_key()).await? else {
            return Ok(Vec::new());
        };
        let value: Value = serde_json::from_str(&raw)?;
        let Value::Array(items) = value else {
            return Err(SettleError::InvalidStoredValue(format!(
                "expected an array of names, got {}",
                raw
            )));
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect())
    }

    /// Like [`try_load`](Self::try_load) but falls back to an empty list.
    pub async fn load(&self) -> Vec<String> {
        match self.try_load().await {
            Ok(names) => names,
            Err(e) => {
                warn!("Failed to load participants, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn save(&self, names: &[String]) -> Result<(), SettleError> {
        let encoded = serde_json::to_string(names)?;
        self.store.set_item(participants_key(), encoded).await
    }
}
