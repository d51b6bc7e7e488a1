use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use classmix::roster::{GroupingRecord, GroupingRepository, RepositoryError, SessionId};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store; held groupings live only as long as the
/// service process, matching the session model of the hosting UI.
#[derive(Default, Clone)]
pub(crate) struct InMemoryGroupingStore {
    records: Arc<Mutex<HashMap<SessionId, GroupingRecord>>>,
}

impl GroupingRepository for InMemoryGroupingStore {
    fn store(&self, session: SessionId, record: GroupingRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        guard.insert(session, record);
        Ok(())
    }

    fn fetch(&self, session: &SessionId) -> Result<Option<GroupingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard.get(session).cloned())
    }

    fn clear(&self, session: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        guard.remove(session);
        Ok(())
    }
}
