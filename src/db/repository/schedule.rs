//! Repository trait for personal schedule items and monthly titles.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{Month, MonthlyTitle, ScheduleItem, ScheduleItemId, UserId};

/// Repository trait for a user's personal calendar records: schedule items
/// and monthly titles.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Store a schedule item.
    ///
    /// # Arguments
    /// * `item` - The item to store (any `id` on the input is ignored)
    ///
    /// # Returns
    /// * `Ok(ScheduleItemId)` - Server-assigned ID of the stored item
    async fn store_schedule_item(&self, item: &ScheduleItem) -> RepositoryResult<ScheduleItemId>;

    /// Fetch one of the user's schedule items for a specific date.
    ///
    /// # Returns
    /// * `Ok(ScheduleItem)` - The item
    /// * `Err(RepositoryError::NotFound)` - If no item with that ID exists
    ///   for the user on that date
    async fn get_schedule_item(
        &self,
        user: UserId,
        id: ScheduleItemId,
        date: NaiveDate,
    ) -> RepositoryResult<ScheduleItem>;

    /// Replace a stored schedule item (addressed by its `id`).
    async fn update_schedule_item(&self, item: &ScheduleItem) -> RepositoryResult<()>;

    /// All of the user's schedule items for a date.
    async fn schedule_items_for_date(
        &self,
        user: UserId,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<ScheduleItem>>;

    /// Fetch the user's title for a month, if set.
    async fn get_monthly_title(
        &self,
        user: UserId,
        month: Month,
    ) -> RepositoryResult<Option<MonthlyTitle>>;

    /// Set or replace the user's title for a month.
    async fn set_monthly_title(&self, title: &MonthlyTitle) -> RepositoryResult<()>;
}
