pub mod file;
pub mod in_memory;
pub mod participants;
pub mod storage_keys;
pub mod worker;

use crate::core::errors::SettleError;
use async_trait::async_trait;

/// String key-value store the participant list is kept in.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, SettleError>;
    async fn set_item(&self, key: &str, value: String) -> Result<(), SettleError>;
}
