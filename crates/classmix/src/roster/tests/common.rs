use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::RosterConfig;
use crate::roster::domain::{GroupingRequest, Partition, SessionId};
use crate::roster::repository::{GroupingRecord, GroupingRepository, RepositoryError};
use crate::roster::service::GroupingService;

pub(super) fn roster_text() -> String {
    "Ann\nBo\nCas\nDag\nEli\nFin\nGro\nHal\nIda\nJon".to_string()
}

pub(super) fn session() -> SessionId {
    SessionId("classroom-7b".to_string())
}

pub(super) fn request(
    names_text: &str,
    separation_text: &str,
    group_size: usize,
    seed: Option<u64>,
) -> GroupingRequest {
    GroupingRequest {
        names_text: names_text.to_string(),
        separation_text: separation_text.to_string(),
        group_size,
        seed,
    }
}

pub(super) fn build_service() -> (GroupingService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = GroupingService::new(store.clone(), RosterConfig::default());
    (service, store)
}

/// Every member of the partition in group order, for set comparisons.
pub(super) fn all_members(partition: &Partition) -> Vec<String> {
    partition
        .groups
        .iter()
        .flat_map(|group| group.members.iter().cloned())
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<SessionId, GroupingRecord>>>,
}

impl GroupingRepository for MemoryStore {
    fn store(&self, session: SessionId, record: GroupingRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(session, record);
        Ok(())
    }

    fn fetch(&self, session: &SessionId) -> Result<Option<GroupingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(session).cloned())
    }

    fn clear(&self, session: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.remove(session);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl GroupingRepository for UnavailableStore {
    fn store(&self, _session: SessionId, _record: GroupingRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _session: &SessionId) -> Result<Option<GroupingRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn clear(&self, _session: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
