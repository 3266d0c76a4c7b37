//! Enrollment expansion.
//!
//! Creating an enrollment binds a routine template to a date range and
//! expands it into one completion record per calendar day in the range.
//! Expansion goes through the repository's get-or-create, so replaying it
//! never duplicates rows.

use chrono::NaiveDate;

use crate::api::{EnrollmentId, RoutineEnrollment, RoutineId, UserId};
use crate::db::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::models::days_inclusive;

/// Result of creating an enrollment.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentOutcome {
    pub enrollment_id: EnrollmentId,
    /// Completion records created by the expansion (one per day in range).
    pub completions_created: usize,
}

/// Enroll a user in a routine over a date range and expand the range into
/// daily completion records.
///
/// `today` is supplied by the caller; enrollments whose range already ended
/// before it are rejected.
///
/// # Errors
/// * `ValidationError` - `end_date < start_date`, `end_date < today`, or an
///   existing enrollment of the same routine already covers `start_date`
/// * `NotFound` - the routine template does not exist
pub async fn enroll_routine(
    repo: &dyn FullRepository,
    user: UserId,
    routine_id: RoutineId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> RepositoryResult<EnrollmentOutcome> {
    if end_date < start_date {
        return Err(RepositoryError::validation_with_context(
            "End date must be on or after start date",
            enroll_context(routine_id),
        ));
    }
    if end_date < today {
        return Err(RepositoryError::validation_with_context(
            "End date cannot be in the past",
            enroll_context(routine_id),
        ));
    }

    // Routine must exist; NotFound propagates to the caller.
    repo.get_routine(routine_id).await?;

    if repo
        .enrollment_covering(user, routine_id, start_date)
        .await?
        .is_some()
    {
        return Err(RepositoryError::validation_with_context(
            "An enrollment of this routine already covers the start date",
            enroll_context(routine_id),
        ));
    }

    let enrollment = RoutineEnrollment::new(user, routine_id, start_date, end_date);
    let enrollment_id = repo.store_enrollment(&enrollment).await?;
    repo.increment_popularity(routine_id).await?;

    let completions_created =
        expand_enrollment(repo, user, enrollment_id, start_date, end_date).await?;

    log::debug!(
        "enrolled user {} in routine {} ({}..={}), {} completions created",
        user,
        routine_id,
        start_date,
        end_date,
        completions_created
    );

    Ok(EnrollmentOutcome {
        enrollment_id,
        completions_created,
    })
}

/// Expand an enrollment into daily completion records.
///
/// Each day in `start_date..=end_date` gets a completion record defaulting
/// to not completed. Idempotent: days that already have a record are left
/// untouched. Returns the number of records created by this call.
pub async fn expand_enrollment(
    repo: &dyn FullRepository,
    user: UserId,
    enrollment_id: EnrollmentId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> RepositoryResult<usize> {
    let mut created = 0;
    for date in days_inclusive(start_date, end_date) {
        let (_, was_created) = repo
            .get_or_create_completion(user, enrollment_id, date)
            .await?;
        if was_created {
            created += 1;
        }
    }
    Ok(created)
}

fn enroll_context(routine_id: RoutineId) -> ErrorContext {
    ErrorContext::new("enroll_routine")
        .with_entity("routine")
        .with_entity_id(routine_id)
}
