use crate::core::errors::SettleError;
use crate::infrastructure::share::{ShareArtifact, ShareTarget};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Records every shared artifact.
#[derive(Clone, Default)]
pub struct InMemoryShareTarget {
    shared: Arc<RwLock<Vec<ShareArtifact>>>,
}

impl InMemoryShareTarget {
    pub fn new() -> Self {
        InMemoryShareTarget {
            shared: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn shared(&self) -> Vec<ShareArtifact> {
        self.shared.read().await.clone()
    }
}

#[async_trait]
impl ShareTarget for InMemoryShareTarget {
    async fn share(&self, artifact: ShareArtifact) -> Result<(), SettleError> {
        self.shared.write().await.push(artifact);
        Ok(())
    }
}
