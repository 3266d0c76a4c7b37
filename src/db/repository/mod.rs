//! Repository trait definitions.
//!
//! The persistence engine is an external collaborator: the rest of the crate
//! talks to it only through these traits, so storage backends can be swapped
//! without touching the service or HTTP layers.

use async_trait::async_trait;

pub mod enrollment;
pub mod error;
pub mod routine;
pub mod schedule;

pub use enrollment::EnrollmentRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use routine::RoutineRepository;
pub use schedule::ScheduleRepository;

/// Combined repository interface used by the service and HTTP layers.
#[async_trait]
pub trait FullRepository:
    RoutineRepository + EnrollmentRepository + ScheduleRepository
{
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
