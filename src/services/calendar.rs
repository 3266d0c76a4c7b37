//! Calendar aggregation.
//!
//! Builds the daily view (schedule items plus active enrollments with that
//! day's completion flag) and the monthly rollup (per-day "everything done"
//! status).

use chrono::NaiveDate;

use crate::api::{Month, RoutineCompletion, ScheduleItem, UserId};
use crate::db::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::routes::daily::{DailyRoutineEntry, DailyViewData};
use crate::routes::monthly::{DayCompletion, MonthlyViewData};

/// Everything attached to a single calendar day: the user's schedule items
/// and the enrollments active on that date, each annotated with the day's
/// completion flag.
pub async fn daily_view(
    repo: &dyn FullRepository,
    user: UserId,
    date: NaiveDate,
) -> RepositoryResult<DailyViewData> {
    let schedules = repo.schedule_items_for_date(user, date).await?;
    let enrollments = repo.enrollments_active_on(user, date).await?;

    let mut routines = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        let enrollment_id = enrollment.id.ok_or_else(|| {
            RepositoryError::internal_with_context(
                "Stored enrollment has no ID",
                ErrorContext::new("daily_view").with_entity("enrollment"),
            )
        })?;
        let routine = repo.get_routine(enrollment.routine).await?;
        // Expansion guarantees a record for every day in range, but an
        // enrollment created before a schema backfill may miss one; treat a
        // missing record as not completed.
        let completed = match repo.get_completion(user, enrollment_id, date).await {
            Ok(completion) => completion.completed,
            Err(RepositoryError::NotFound { .. }) => false,
            Err(e) => return Err(e),
        };
        routines.push(DailyRoutineEntry {
            enrollment_id,
            routine_id: enrollment.routine,
            title: routine.title,
            completed,
        });
    }

    Ok(DailyViewData {
        schedules,
        routines,
    })
}

/// Per-day completion rollup for a month.
///
/// A day counts as completed when every routine completion record and every
/// schedule item recorded for it is done; days with no records are
/// vacuously completed.
pub async fn monthly_view(
    repo: &dyn FullRepository,
    user: UserId,
    month: Month,
) -> RepositoryResult<MonthlyViewData> {
    let mut days = Vec::new();
    for date in month.days() {
        let completions = repo.completions_for_date(user, date).await?;
        let items = repo.schedule_items_for_date(user, date).await?;
        days.push(DayCompletion {
            date,
            completed: all_completed(&completions, &items),
        });
    }
    Ok(MonthlyViewData { days })
}

/// True when every completion and every schedule item is done.
/// Vacuously true for empty slices.
pub(crate) fn all_completed(completions: &[RoutineCompletion], items: &[ScheduleItem]) -> bool {
    completions.iter().all(|c| c.completed) && items.iter().all(|i| i.completed)
}
