use crate::constants::{PARTICIPANT_ADDED, PARTICIPANT_REMOVED, PARTICIPANTS_LOADED, PARTICIPANTS_REPLACED};
use crate::core::errors::SettleError;
use crate::core::models::Notice;
use crate::core::registry::ParticipantRegistry;
use crate::core::summary::SettlementSummary;
use crate::infrastructure::share::{Capture, ShareTarget};
use crate::infrastructure::storage::KeyValueStore;
use crate::infrastructure::storage::participants::ParticipantRepository;
use crate::infrastructure::storage::worker::{PersistJob, PersistQueue};
use log::{error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Loaded,
    Mutated,
}

/// Single owner of the participant registry for the running session.
///
/// Every mutation swaps in the next registry version and queues a snapshot
/// for the persistence worker without waiting on it. Storage failures never
/// roll back the in-memory registry.
pub struct RegistryService {
    registry: ParticipantRegistry,
    state: RegistryState,
    queue: PersistQueue,
}

impl RegistryService {
    pub fn new(queue: PersistQueue) -> Self {
        RegistryService {
            registry: ParticipantRegistry::new(),
            state: RegistryState::Uninitialized,
            queue,
        }
    }

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Loads the stored participants. Unreadable or malformed data yields an
    /// empty registry; this never fails.
    pub async fn load<S: KeyValueStore>(&mut self, repository: &ParticipantRepository<S>) -> &ParticipantRegistry {
        let names = repository.load().await;
        self.registry = ParticipantRegistry::from_names(names);
        self.state = RegistryState::Loaded;
        info!("{}: {} participants", PARTICIPANTS_LOADED, self.registry.len());
        &self.registry
    }

    pub fn add(&mut self, name: &str) -> Result<Notice, SettleError> {
        let next = self.registry.with_added(name).inspect_err(|e| {
            warn!("Rejected participant '{}': {}", name, e);
        })?;
        info!("{}: {}", PARTICIPANT_ADDED, name.trim());
        self.commit(next);
        Ok(Notice::success("Participant added."))
    }

    /// Returns `None` when `name` is not registered.
    pub fn remove(&mut self, name: &str) -> Option<Notice> {
        let next = self.registry.with_removed(name)?;
        info!("{}: {}", PARTICIPANT_REMOVED, name);
        self.commit(next);
        Some(Notice::info("Participant removed."))
    }

    pub fn replace_all<I, S>(&mut self, names: I) -> Notice
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let next = self.registry.with_replaced(names);
        info!("{}: {} participants", PARTICIPANTS_REPLACED, next.len());
        self.commit(next);
        Notice::success("Participants updated.")
    }

    fn commit(&mut self, next: ParticipantRegistry) {
        self.registry = next;
        self.state = RegistryState::Mutated;
        let job = PersistJob {
            version: self.registry.version(),
            names: self.registry.names(),
        };
        if let Err(e) = self.queue.send(job) {
            warn!(
                "Persistence queue closed; registry version {} kept in memory only",
                e.0.version
            );
        }
    }
}

/// Captures a summary and hands it to the share target.
pub struct ShareService<C: Capture, T: ShareTarget> {
    capture: C,
    target: T,
}

impl<C: Capture, T: ShareTarget> ShareService<C, T> {
    pub fn new(capture: C, target: T) -> Self {
        ShareService { capture, target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Any capture or share failure comes back as `ShareFailed`.
    pub async fn share_summary(&self, summary: &SettlementSummary) -> Result<(), SettleError> {
        let artifact = self.capture.capture(summary).await.map_err(|e| {
            error!("Capture failed: {}", e);
            SettleError::ShareFailed(e.to_string())
        })?;
        self.target.share(artifact).await.map_err(|e| {
            error!("Share failed: {}", e);
            SettleError::ShareFailed(e.to_string())
        })
    }
}
