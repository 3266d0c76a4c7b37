//! In-memory repository implementation.
//!
//! `LocalRepository` backs unit tests and local development. All state lives
//! in `parking_lot`-guarded maps; locks are never held across an await point.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::api::{
    EnrollmentId, Month, MonthlyTitle, Routine, RoutineCompletion, RoutineEnrollment, RoutineId,
    ScheduleItem, ScheduleItemId, UserId,
};
use crate::db::repository::{
    EnrollmentRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    RoutineRepository, ScheduleRepository,
};

#[derive(Default)]
struct State {
    routines: HashMap<RoutineId, Routine>,
    enrollments: HashMap<EnrollmentId, RoutineEnrollment>,
    // Keyed by (enrollment, date): the uniqueness invariant for completions.
    completions: HashMap<(EnrollmentId, NaiveDate), RoutineCompletion>,
    schedule_items: HashMap<ScheduleItemId, ScheduleItem>,
    monthly_titles: HashMap<(UserId, Month), MonthlyTitle>,
    next_routine_id: i64,
    next_enrollment_id: i64,
    next_item_id: i64,
}

/// In-memory repository for unit testing and local development.
pub struct LocalRepository {
    state: RwLock<State>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_routine_id: 1,
                next_enrollment_id: 1,
                next_item_id: 1,
                ..State::default()
            }),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn routine_not_found(id: RoutineId, operation: &str) -> RepositoryError {
    RepositoryError::not_found_with_context(
        "Routine not found",
        ErrorContext::new(operation)
            .with_entity("routine")
            .with_entity_id(id),
    )
}

fn enrollment_not_found(id: EnrollmentId, operation: &str) -> RepositoryError {
    RepositoryError::not_found_with_context(
        "Enrollment not found",
        ErrorContext::new(operation)
            .with_entity("enrollment")
            .with_entity_id(id),
    )
}

#[async_trait]
impl RoutineRepository for LocalRepository {
    async fn store_routine(&self, routine: &Routine) -> RepositoryResult<RoutineId> {
        let mut state = self.state.write();
        let id = RoutineId::new(state.next_routine_id);
        state.next_routine_id += 1;

        let mut stored = routine.clone();
        stored.id = Some(id);
        state.routines.insert(id, stored);
        Ok(id)
    }

    async fn get_routine(&self, id: RoutineId) -> RepositoryResult<Routine> {
        self.state
            .read()
            .routines
            .get(&id)
            .cloned()
            .ok_or_else(|| routine_not_found(id, "get_routine"))
    }

    async fn list_routines(&self) -> RepositoryResult<Vec<Routine>> {
        let state = self.state.read();
        let mut routines: Vec<Routine> = state.routines.values().cloned().collect();
        routines.sort_by_key(|r| r.id);
        Ok(routines)
    }

    async fn increment_popularity(&self, id: RoutineId) -> RepositoryResult<i64> {
        let mut state = self.state.write();
        let routine = state
            .routines
            .get_mut(&id)
            .ok_or_else(|| routine_not_found(id, "increment_popularity"))?;
        routine.popular += 1;
        Ok(routine.popular)
    }
}

#[async_trait]
impl EnrollmentRepository for LocalRepository {
    async fn store_enrollment(
        &self,
        enrollment: &RoutineEnrollment,
    ) -> RepositoryResult<EnrollmentId> {
        if enrollment.end_date < enrollment.start_date {
            return Err(RepositoryError::validation_with_context(
                "end_date precedes start_date",
                ErrorContext::new("store_enrollment").with_entity("enrollment"),
            ));
        }

        let mut state = self.state.write();
        let id = EnrollmentId::new(state.next_enrollment_id);
        state.next_enrollment_id += 1;

        let mut stored = enrollment.clone();
        stored.id = Some(id);
        state.enrollments.insert(id, stored);
        Ok(id)
    }

    async fn get_enrollment(
        &self,
        user: UserId,
        id: EnrollmentId,
    ) -> RepositoryResult<RoutineEnrollment> {
        self.state
            .read()
            .enrollments
            .get(&id)
            .filter(|e| e.user == user)
            .cloned()
            .ok_or_else(|| enrollment_not_found(id, "get_enrollment"))
    }

    async fn enrollments_active_on(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<RoutineEnrollment>> {
        let state = self.state.read();
        let mut active: Vec<RoutineEnrollment> = state
            .enrollments
            .values()
            .filter(|e| e.user == user && e.is_active_on(date))
            .cloned()
            .collect();
        active.sort_by_key(|e| e.id);
        Ok(active)
    }

    async fn enrollment_covering(
        &self,
        user: UserId,
        routine: RoutineId,
        date: NaiveDate,
    ) -> RepositoryResult<Option<RoutineEnrollment>> {
        let state = self.state.read();
        Ok(state
            .enrollments
            .values()
            .find(|e| e.user == user && e.routine == routine && e.is_active_on(date))
            .cloned())
    }

    async fn get_or_create_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
    ) -> RepositoryResult<(RoutineCompletion, bool)> {
        let mut state = self.state.write();
        if !state.enrollments.contains_key(&enrollment) {
            return Err(enrollment_not_found(enrollment, "get_or_create_completion"));
        }

        let mut created = false;
        let completion = state
            .completions
            .entry((enrollment, date))
            .or_insert_with(|| {
                created = true;
                RoutineCompletion {
                    user,
                    enrollment,
                    date,
                    completed: false,
                }
            })
            .clone();
        Ok((completion, created))
    }

    async fn get_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
    ) -> RepositoryResult<RoutineCompletion> {
        self.state
            .read()
            .completions
            .get(&(enrollment, date))
            .filter(|c| c.user == user)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Completion record not found",
                    ErrorContext::new("get_completion")
                        .with_entity("completion")
                        .with_entity_id(enrollment)
                        .with_details(format!("date={}", date)),
                )
            })
    }

    async fn set_completion(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
        date: NaiveDate,
        completed: bool,
    ) -> RepositoryResult<RoutineCompletion> {
        let mut state = self.state.write();
        let completion = state
            .completions
            .get_mut(&(enrollment, date))
            .filter(|c| c.user == user)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Completion record not found",
                    ErrorContext::new("set_completion")
                        .with_entity("completion")
                        .with_entity_id(enrollment)
                        .with_details(format!("date={}", date)),
                )
            })?;
        completion.completed = completed;
        Ok(completion.clone())
    }

    async fn completions_for_date(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<RoutineCompletion>> {
        let state = self.state.read();
        let mut completions: Vec<RoutineCompletion> = state
            .completions
            .values()
            .filter(|c| c.user == user && c.date == date)
            .cloned()
            .collect();
        completions.sort_by_key(|c| c.enrollment);
        Ok(completions)
    }

    async fn completions_for_enrollment(
        &self,
        user: UserId,
        enrollment: EnrollmentId,
    ) -> RepositoryResult<Vec<RoutineCompletion>> {
        let state = self.state.read();
        let mut completions: Vec<RoutineCompletion> = state
            .completions
            .values()
            .filter(|c| c.user == user && c.enrollment == enrollment)
            .cloned()
            .collect();
        completions.sort_by_key(|c| c.date);
        Ok(completions)
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn store_schedule_item(&self, item: &ScheduleItem) -> RepositoryResult<ScheduleItemId> {
        let mut state = self.state.write();
        let id = ScheduleItemId::new(state.next_item_id);
        state.next_item_id += 1;

        let mut stored = item.clone();
        stored.id = Some(id);
        state.schedule_items.insert(id, stored);
        Ok(id)
    }

    async fn get_schedule_item(
        &self,
        user: UserId,
        id: ScheduleItemId,
        date: NaiveDate,
    ) -> RepositoryResult<ScheduleItem> {
        self.state
            .read()
            .schedule_items
            .get(&id)
            .filter(|i| i.user == user && i.date == date)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Schedule item not found",
                    ErrorContext::new("get_schedule_item")
                        .with_entity("schedule_item")
                        .with_entity_id(id),
                )
            })
    }

    async fn update_schedule_item(&self, item: &ScheduleItem) -> RepositoryResult<()> {
        let id = item.id.ok_or_else(|| {
            RepositoryError::validation_with_context(
                "Schedule item has no ID",
                ErrorContext::new("update_schedule_item").with_entity("schedule_item"),
            )
        })?;

        let mut state = self.state.write();
        match state.schedule_items.get_mut(&id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found_with_context(
                "Schedule item not found",
                ErrorContext::new("update_schedule_item")
                    .with_entity("schedule_item")
                    .with_entity_id(id),
            )),
        }
    }

    async fn schedule_items_for_date(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<ScheduleItem>> {
        let state = self.state.read();
        let mut items: Vec<ScheduleItem> = state
            .schedule_items
            .values()
            .filter(|i| i.user == user && i.date == date)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn get_monthly_title(
        &self,
        user: UserId,
        month: Month,
    ) -> RepositoryResult<Option<MonthlyTitle>> {
        Ok(self.state.read().monthly_titles.get(&(user, month)).cloned())
    }

    async fn set_monthly_title(&self, title: &MonthlyTitle) -> RepositoryResult<()> {
        let mut state = self.state.write();
        state
            .monthly_titles
            .insert((title.user, title.month), title.clone());
        Ok(())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
