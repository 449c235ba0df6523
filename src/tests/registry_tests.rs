use crate::core::errors::SettleError;
use crate::core::models::NoticeLevel;
use crate::core::registry::ParticipantRegistry;
use crate::core::services::{RegistryService, RegistryState};
use crate::infrastructure::storage::KeyValueStore;
use crate::infrastructure::storage::in_memory::InMemoryKeyValueStore;
use crate::infrastructure::storage::participants::ParticipantRepository;
use crate::infrastructure::storage::storage_keys::participants_key;
use crate::infrastructure::storage::worker::{PersistJob, PersistenceWorker};
use crate::tests::{FailingStore, participant, registry};
use std::sync::Arc;
use tokio::sync::mpsc;

#[test]
fn test_add_rejects_duplicate() {
    let registry = ParticipantRegistry::new().with_added("Alice").unwrap();
    let result = registry.with_added("Alice");

    assert!(matches!(result, Err(SettleError::DuplicateParticipant(ref n)) if n == "Alice"));
    assert_eq!(registry.names(), vec!["Alice"]);
}

#[test]
fn test_add_trims_and_rejects_blank() {
    let registry = ParticipantRegistry::new().with_added("  Bob  ").unwrap();
    assert_eq!(registry.names(), vec!["Bob"]);
    assert_eq!(registry.with_added("   "), Err(SettleError::EmptyParticipantName));
    // Matching is case-sensitive
    assert!(registry.with_added("bob").is_ok());
    assert!(registry.with_added(" Bob").is_err());
}

#[test]
fn test_mutations_produce_new_versions() {
    let v0 = registry(&["A", "B"]);
    let v1 = v0.with_added("C").unwrap();
    let v2 = v1.with_removed("A").unwrap();

    assert_eq!(v0.names(), vec!["A", "B"]);
    assert_eq!(v1.names(), vec!["A", "B", "C"]);
    assert_eq!(v2.names(), vec!["B", "C"]);
    assert_eq!((v0.version(), v1.version(), v2.version()), (0, 1, 2));
    assert!(v2.with_removed("A").is_none());
}

#[test]
fn test_replace_drops_blanks_and_duplicates() {
    let replaced = registry(&["A"]).with_replaced(["B", " ", "C", "B", "A"]);
    assert_eq!(replaced.names(), vec!["B", "C", "A"]);
    assert_eq!(replaced.version(), 1);
    assert!(replaced.contains(&participant("C")));
}

#[tokio::test]
async fn test_service_queues_persist_on_mutation() {
    let _ = env_logger::try_init();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut service = RegistryService::new(tx);
    assert_eq!(service.state(), RegistryState::Uninitialized);

    let notice = service.add("Alice").unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(service.state(), RegistryState::Mutated);
    assert_eq!(
        rx.try_recv().unwrap(),
        PersistJob {
            version: 1,
            names: vec!["Alice".to_string()],
        }
    );

    assert!(service.add("Alice").is_err());
    assert!(rx.try_recv().is_err(), "rejected add must not persist");
    assert_eq!(service.registry().names(), vec!["Alice"]);

    assert!(service.remove("Nobody").is_none());
    assert!(rx.try_recv().is_err(), "no-op remove must not persist");

    service.remove("Alice").unwrap();
    assert_eq!(rx.try_recv().unwrap().names, Vec::<String>::new());

    service.replace_all(["X", "Y"]);
    assert_eq!(rx.try_recv().unwrap().names, vec!["X", "Y"]);
}

#[tokio::test]
async fn test_closed_queue_keeps_in_memory_state() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let mut service = RegistryService::new(tx);

    service.add("Alice").unwrap();
    assert_eq!(service.registry().names(), vec!["Alice"]);
}

#[tokio::test]
async fn test_load_falls_back_on_non_array() {
    let _ = env_logger::try_init();
    let (tx, _rx) = mpsc::unbounded_channel();
    let repository = ParticipantRepository::new(InMemoryKeyValueStore::with_item(
        participants_key(),
        "\"not-an-array\"",
    ));
    let mut service = RegistryService::new(tx);

    let loaded = service.load(&repository).await;
    assert!(loaded.is_empty());
    assert_eq!(service.state(), RegistryState::Loaded);
}

#[tokio::test]
async fn test_load_falls_back_on_malformed_json_and_storage_error() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut service = RegistryService::new(tx);

    let malformed = ParticipantRepository::new(InMemoryKeyValueStore::with_item(participants_key(), "not-an-array"));
    assert!(service.load(&malformed).await.is_empty());

    let failing = ParticipantRepository::new(FailingStore);
    assert!(service.load(&failing).await.is_empty());
}

#[tokio::test]
async fn test_load_reads_stored_names() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let repository = ParticipantRepository::new(InMemoryKeyValueStore::with_item(
        participants_key(),
        r#"["Alice", "Bob", 3, "Alice", ""]"#,
    ));
    let mut service = RegistryService::new(tx);

    let loaded = service.load(&repository).await;
    assert_eq!(loaded.names(), vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn test_worker_persists_latest_registry() {
    let _ = env_logger::try_init();
    let store = InMemoryKeyValueStore::new();
    let repository = Arc::new(ParticipantRepository::new(store.clone()));
    let (queue, worker) = PersistenceWorker::spawn(Arc::clone(&repository));

    let mut service = RegistryService::new(queue);
    service.add("Alice").unwrap();
    service.add("Bob").unwrap();
    service.remove("Alice");
    drop(service);
    worker.await.unwrap();

    let stored = store.get_item(participants_key()).await.unwrap();
    assert_eq!(stored.as_deref(), Some(r#"["Bob"]"#));
}

#[tokio::test]
async fn test_worker_survives_storage_failure() {
    let _ = env_logger::try_init();
    let repository = Arc::new(ParticipantRepository::new(FailingStore));
    let (queue, worker) = PersistenceWorker::spawn(repository);

    let mut service = RegistryService::new(queue);
    service.add("Alice").unwrap();
    service.add("Bob").unwrap();
    assert_eq!(service.registry().names(), vec!["Alice", "Bob"]);

    drop(service);
    worker.await.unwrap();
}
