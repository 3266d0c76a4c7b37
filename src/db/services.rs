//! High-level record operations over the repository traits.
//!
//! These functions work with any repository implementation and are the
//! entry points the HTTP handlers use for plain CRUD. Business logic that
//! spans records (enrollment expansion, calendar rollups) lives in
//! [`crate::services`].

use chrono::NaiveDate;

use super::repository::{FullRepository, RepositoryResult};
use crate::api::{
    EnrollmentId, Month, MonthlyTitle, Routine, RoutineCompletion, RoutineId, RoutineInfo,
    ScheduleItem, ScheduleItemId, UserId,
};

/// Check that the repository is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Store a new routine template.
pub async fn store_routine(
    repo: &dyn FullRepository,
    routine: &Routine,
) -> RepositoryResult<RoutineId> {
    let id = repo.store_routine(routine).await?;
    log::debug!("stored routine {} ({})", id, routine.title);
    Ok(id)
}

/// Fetch a routine template by ID.
pub async fn get_routine(repo: &dyn FullRepository, id: RoutineId) -> RepositoryResult<Routine> {
    repo.get_routine(id).await
}

/// List routine templates as lightweight info entries.
pub async fn list_routines(repo: &dyn FullRepository) -> RepositoryResult<Vec<RoutineInfo>> {
    let routines = repo.list_routines().await?;
    Ok(routines
        .into_iter()
        .filter_map(|r| {
            r.id.map(|id| RoutineInfo {
                routine_id: id,
                title: r.title,
                popular: r.popular,
            })
        })
        .collect())
}

/// Create a personal schedule item for a date and return the stored record.
pub async fn create_schedule_item(
    repo: &dyn FullRepository,
    user: UserId,
    date: NaiveDate,
    title: String,
    description: String,
) -> RepositoryResult<ScheduleItem> {
    let item = ScheduleItem {
        id: None,
        user,
        title,
        description,
        date,
        completed: false,
    };
    let id = repo.store_schedule_item(&item).await?;
    repo.get_schedule_item(user, id, date).await
}

/// Partial update of a schedule item.
///
/// `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ScheduleItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Apply a partial update to one of the user's schedule items on a date.
pub async fn update_schedule_item(
    repo: &dyn FullRepository,
    user: UserId,
    date: NaiveDate,
    id: ScheduleItemId,
    patch: ScheduleItemPatch,
) -> RepositoryResult<ScheduleItem> {
    let mut item = repo.get_schedule_item(user, id, date).await?;
    if let Some(title) = patch.title {
        item.title = title;
    }
    if let Some(description) = patch.description {
        item.description = description;
    }
    if let Some(completed) = patch.completed {
        item.completed = completed;
    }
    repo.update_schedule_item(&item).await?;
    Ok(item)
}

/// Set the `completed` flag of a routine completion record.
pub async fn set_completion(
    repo: &dyn FullRepository,
    user: UserId,
    enrollment: EnrollmentId,
    date: NaiveDate,
    completed: bool,
) -> RepositoryResult<RoutineCompletion> {
    let completion = repo.set_completion(user, enrollment, date, completed).await?;
    log::debug!(
        "completion for enrollment {} on {} set to {}",
        enrollment,
        date,
        completed
    );
    Ok(completion)
}

/// Fetch the user's monthly title, if set.
pub async fn get_monthly_title(
    repo: &dyn FullRepository,
    user: UserId,
    month: Month,
) -> RepositoryResult<Option<MonthlyTitle>> {
    repo.get_monthly_title(user, month).await
}

/// Set or replace the user's monthly title.
pub async fn set_monthly_title(
    repo: &dyn FullRepository,
    user: UserId,
    month: Month,
    title: String,
) -> RepositoryResult<MonthlyTitle> {
    let record = MonthlyTitle { user, month, title };
    repo.set_monthly_title(&record).await?;
    Ok(record)
}
