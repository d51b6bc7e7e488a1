use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{GroupView, Partition, SessionId};

/// Grouping held for a session between generate actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingRecord {
    pub partition: Partition,
    pub colors: Vec<String>,
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

impl GroupingRecord {
    /// Read-only per-group views for rendering: 1-based index, display
    /// color, member count, and members in placement order.
    pub fn group_views(&self) -> Vec<GroupView> {
        self.partition
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| GroupView {
                index: i + 1,
                size: group.len(),
                color: self.colors.get(i).cloned().unwrap_or_default(),
                members: group.members.clone(),
            })
            .collect()
    }
}

/// Storage abstraction so the service can be exercised in isolation; the
/// hosting layer owns the concrete session store.
pub trait GroupingRepository: Send + Sync {
    fn store(&self, session: SessionId, record: GroupingRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, session: &SessionId) -> Result<Option<GroupingRecord>, RepositoryError>;
    fn clear(&self, session: &SessionId) -> Result<(), RepositoryError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
