//! Roster intake and random group formation.

pub mod domain;
pub mod export;
mod normalizer;
mod palette;
mod partition;
mod plan;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Group, GroupView, GroupingError, GroupingRequest, Partition, SessionId};
pub use export::{csv_bytes, ExportError};
pub use normalizer::parse_names;
pub use palette::group_colors;
pub use partition::split_with_separation;
pub use plan::{group_count, planned_sizes};
pub use repository::{GroupingRecord, GroupingRepository, RepositoryError};
pub use router::roster_router;
pub use service::{rng_for, GroupingService, GroupingServiceError};
