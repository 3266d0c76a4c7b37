//! Repository trait for routine templates.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Routine, RoutineId};

/// Repository trait for routine template operations.
///
/// Templates are written once and are immutable from the calendar's
/// perspective; only the popularity counter changes afterwards.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    /// Store a routine template.
    ///
    /// # Arguments
    /// * `routine` - The template to store (any `id` on the input is ignored)
    ///
    /// # Returns
    /// * `Ok(RoutineId)` - Server-assigned ID of the stored template
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_routine(&self, routine: &Routine) -> RepositoryResult<RoutineId>;

    /// Fetch a routine template by ID.
    ///
    /// # Returns
    /// * `Ok(Routine)` - The template
    /// * `Err(RepositoryError::NotFound)` - If no such template exists
    async fn get_routine(&self, id: RoutineId) -> RepositoryResult<Routine>;

    /// List all routine templates.
    async fn list_routines(&self) -> RepositoryResult<Vec<Routine>>;

    /// Increment a routine's popularity counter.
    ///
    /// # Returns
    /// * `Ok(i64)` - The new counter value
    /// * `Err(RepositoryError::NotFound)` - If no such template exists
    async fn increment_popularity(&self, id: RoutineId) -> RepositoryResult<i64>;
}
