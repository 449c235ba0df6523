use crate::infrastructure::storage::KeyValueStore;
use crate::infrastructure::storage::participants::ParticipantRepository;
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One snapshot of the registry to write out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistJob {
    pub version: u64,
    pub names: Vec<String>,
}

pub type PersistQueue = mpsc::UnboundedSender<PersistJob>;

/// Background task that drains persist jobs into a repository.
///
/// Jobs are saved in order; failures are logged and dropped. The task ends
/// once every queue handle has been dropped.
pub struct PersistenceWorker;

impl PersistenceWorker {
    pub fn spawn<S>(repository: Arc<ParticipantRepository<S>>) -> (PersistQueue, JoinHandle<()>)
    where
        S: KeyValueStore + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(Self::run(repository, rx));
        (tx, handle)
    }

    async fn run<S: KeyValueStore>(
        repository: Arc<ParticipantRepository<S>>,
        mut rx: mpsc::UnboundedReceiver<PersistJob>,
    ) {
        while let Some(job) = rx.recv().await {
            match repository.save(&job.names).await {
                Ok(()) => debug!("Persisted registry version {} ({} names)", job.version, job.names.len()),
                Err(e) => error!("Failed to persist registry version {}: {}", job.version, e),
            }
        }
        debug!("Persistence queue closed");
    }
}
