use crate::core::errors::SettleError;
use crate::infrastructure::share::{ShareArtifact, ShareTarget};
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::path::PathBuf;

/// Drops shared artifacts into a directory, one timestamped file each.
#[derive(Clone, Debug)]
pub struct FileShareTarget {
    dir: PathBuf,
}

impl FileShareTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileShareTarget { dir: dir.into() }
    }
}

#[async_trait]
impl ShareTarget for FileShareTarget {
    async fn share(&self, artifact: ShareArtifact) -> Result<(), SettleError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let file_name = format!(
            "settlement-{}.{}",
            Utc::now().format("%Y%m%d-%H%M%S%.3f"),
            artifact.file_extension
        );
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, &artifact.bytes).await?;
        info!("{}: {} ({})", artifact.title, artifact.message, path.display());
        Ok(())
    }
}
