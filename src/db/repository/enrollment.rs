//! Repository trait for enrollments and daily completion records.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{EnrollmentId, RoutineCompletion, RoutineEnrollment, RoutineId, UserId};

/// Repository trait for enrollment and completion operations.
///
/// Completion records hold the `(enrollment, date)` uniqueness invariant:
/// [`EnrollmentRepository::get_or_create_completion`] is the only way to
/// insert one, so re-running an expansion can never duplicate rows.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Store an enrollment.
    ///
    /// # Arguments
    /// * `enrollment` - The enrollment to store (any `id` on the input is ignored)
    ///
    /// # Returns
    /// * `Ok(EnrollmentId)` - Server-assigned ID of the stored enrollment
    /// * `Err(RepositoryError::ValidationError)` - If `end_date < start_date`
    async fn store_enrollment(
        &self,
        enrollment: &RoutineEnrollment,
    ) -> RepositoryResult<EnrollmentId>;

    /// Fetch one of the user's enrollments by ID.
    async fn get_enrollment(
        &self,
        user: UserId,
        id: EnrollmentId,
    ) -> RepositoryResult<RoutineEnrollment>;

    /// Enrollments of the user whose range covers `date`.
    async fn enrollments_active_on(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<RoutineEnrollment>>;

    /// Find an existing enrollment of `routine` whose range covers `date`, if any.
    ///
    /// Used to reject duplicate enrollments of the same routine.
    async fn enrollment_covering(
        &self,
        user: UserId,
        routine: RoutineId,
        date: NaiveDate,
    ) -> RepositoryResult<Option<RoutineEnrollment>>;

    /// Get or create the completion record for `(enrollment, date)`.
    ///
    /// A new record defaults to `completed = false`.
    ///
    /// # Returns
    /// * `Ok((RoutineCompletion, bool))` - The record and whether it was created
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_or_create_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
    ) -> RepositoryResult<(RoutineCompletion, bool)>;

    /// Fetch the completion record for `(enrollment, date)`.
    ///
    /// # Returns
    /// * `Ok(RoutineCompletion)` - The record
    /// * `Err(RepositoryError::NotFound)` - If no record exists
    async fn get_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
    ) -> RepositoryResult<RoutineCompletion>;

    /// Set the `completed` flag of an existing completion record.
    ///
    /// # Returns
    /// * `Ok(RoutineCompletion)` - The updated record
    /// * `Err(RepositoryError::NotFound)` - If no record exists
    async fn set_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
        completed: bool,
    ) -> RepositoryResult<RoutineCompletion>;

    /// All of the user's completion records for a date, across enrollments.
    async fn completions_for_date(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<RoutineCompletion>>;

    /// All completion records belonging to one enrollment.
    async fn completions_for_enrollment(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
    ) -> RepositoryResult<Vec<RoutineCompletion>>;
}
