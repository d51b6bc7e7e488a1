use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::RosterConfig;

use super::domain::{GroupingError, GroupingRequest, Partition, SessionId};
use super::export::{csv_bytes, ExportError};
use super::normalizer::parse_names;
use super::palette::group_colors;
use super::partition::split_with_separation;
use super::plan::{group_count, planned_sizes};
use super::repository::{GroupingRecord, GroupingRepository, RepositoryError};

/// Service composing the normalizer, size planner, partitioner, and palette
/// behind a session-scoped store.
pub struct GroupingService<R> {
    repository: Arc<R>,
    limits: RosterConfig,
}

impl<R> GroupingService<R>
where
    R: GroupingRepository + 'static,
{
    pub fn new(repository: Arc<R>, limits: RosterConfig) -> Self {
        Self { repository, limits }
    }

    /// Runs one generate action for the session. On any grouping failure the
    /// held record is cleared first so stale groups are never served again.
    pub fn generate(
        &self,
        session: &SessionId,
        request: &GroupingRequest,
    ) -> Result<GroupingRecord, GroupingServiceError> {
        self.check_bounds(request)?;

        match build_grouping(request) {
            Ok(record) => {
                self.repository.store(session.clone(), record.clone())?;
                Ok(record)
            }
            Err(error) => {
                self.repository.clear(session)?;
                Err(GroupingServiceError::Grouping(error))
            }
        }
    }

    /// Read-only fetch of the grouping currently held for the session.
    pub fn current(
        &self,
        session: &SessionId,
    ) -> Result<Option<GroupingRecord>, GroupingServiceError> {
        Ok(self.repository.fetch(session)?)
    }

    /// CSV artifact for the held grouping.
    pub fn export_csv(&self, session: &SessionId) -> Result<Vec<u8>, GroupingServiceError> {
        let record = self
            .repository
            .fetch(session)?
            .ok_or(GroupingServiceError::NothingGenerated)?;
        Ok(csv_bytes(&record.partition)?)
    }

    pub fn clear(&self, session: &SessionId) -> Result<(), GroupingServiceError> {
        self.repository.clear(session)?;
        Ok(())
    }

    fn check_bounds(&self, request: &GroupingRequest) -> Result<(), GroupingServiceError> {
        if request.group_size < self.limits.min_group_size
            || request.group_size > self.limits.max_group_size
        {
            return Err(GroupingServiceError::GroupSizeOutOfRange {
                requested: request.group_size,
                min: self.limits.min_group_size,
                max: self.limits.max_group_size,
            });
        }

        if let Some(seed) = request.seed {
            if seed > self.limits.max_seed {
                return Err(GroupingServiceError::SeedOutOfRange {
                    requested: seed,
                    max: self.limits.max_seed,
                });
            }
        }

        Ok(())
    }
}

/// One generate action as a pure function of the request: normalize both
/// text fields, plan sizes, partition, and color. The same RNG drives the
/// member shuffle and the color order, so a fixed seed reproduces both.
pub(crate) fn build_grouping(request: &GroupingRequest) -> Result<GroupingRecord, GroupingError> {
    let roster = parse_names(&request.names_text);
    if roster.is_empty() {
        return Err(GroupingError::EmptyRoster);
    }
    let separated = parse_names(&request.separation_text);

    let groups = group_count(roster.len(), request.group_size);
    let targets = planned_sizes(roster.len(), groups);

    let mut rng = rng_for(request.seed);
    let formed = split_with_separation(&roster, &separated, &targets, &mut rng)?;
    let colors = group_colors(formed.len(), &mut rng);

    Ok(GroupingRecord {
        partition: Partition { groups: formed },
        colors,
        seed: request.seed,
        generated_at: Utc::now(),
    })
}

/// Deterministic generator when a seed is given, entropy-seeded otherwise.
pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Error raised by the grouping service.
#[derive(Debug, thiserror::Error)]
pub enum GroupingServiceError {
    #[error(transparent)]
    Grouping(#[from] GroupingError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("group size {requested} is outside the allowed range {min}..={max}")]
    GroupSizeOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("seed {requested} is outside the allowed range 0..={max}")]
    SeedOutOfRange { requested: u64, max: u64 },
    #[error("no grouping has been generated for this session")]
    NothingGenerated,
}
