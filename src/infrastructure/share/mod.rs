pub mod capture;
pub mod file;
pub mod in_memory;

use crate::core::errors::SettleError;
use crate::core::summary::SettlementSummary;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A rendered summary ready to hand to the platform share sheet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareArtifact {
    pub title: String,
    pub message: String,
    pub content_type: String,
    pub file_extension: String,
    pub bytes: Vec<u8>,
}

/// Turns a summary into a shareable image.
#[async_trait]
pub trait Capture: Send + Sync {
    async fn capture(&self, summary: &SettlementSummary) -> Result<ShareArtifact, SettleError>;
}

#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, artifact: ShareArtifact) -> Result<(), SettleError>;
}
