//! Public API surface for the backend.
//!
//! This file consolidates the domain types shared by the repository,
//! service, and HTTP layers. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::routes::daily::DailyRoutineEntry;
pub use crate::routes::daily::DailyViewData;
pub use crate::routes::monthly::DayCompletion;
pub use crate::routes::monthly::MonthlyViewData;
pub use crate::routes::routines::RoutineInfo;

pub use crate::models::Month;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(i64, UserId);
define_id_type!(i64, RoutineId);
define_id_type!(i64, EnrollmentId);
define_id_type!(i64, ScheduleItemId);

/// Routine template.
///
/// Immutable from the calendar's perspective, except for the `popular`
/// counter which increments each time a user enrolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<RoutineId>,
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default)]
    pub content: String,
    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Instructional video URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Category names
    #[serde(default)]
    pub category: Vec<String>,
    /// Owning celebrity
    #[serde(default)]
    pub celebrity: String,
    #[serde(default)]
    pub theme: String,
    /// Enrollment counter
    #[serde(default)]
    pub popular: i64,
}

/// A user's binding of a routine template to a date range.
///
/// Invariant: `start_date <= end_date`. Creating an enrollment triggers
/// expansion into one [`RoutineCompletion`] per day in the range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineEnrollment {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<EnrollmentId>,
    pub user: UserId,
    pub routine: RoutineId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoutineEnrollment {
    pub fn new(user: UserId, routine: RoutineId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: None,
            user,
            routine,
            start_date,
            end_date,
        }
    }

    /// Check whether this enrollment covers the given date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Daily record of whether a routine was done on a specific date.
///
/// Invariant: unique per `(enrollment, date)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineCompletion {
    pub user: UserId,
    pub enrollment: EnrollmentId,
    pub date: NaiveDate,
    pub completed: bool,
}

/// Personal schedule item, independent of routines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<ScheduleItemId>,
    pub user: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

/// Free-form label a user attaches to a calendar month.
///
/// One per `(user, month)`; setting it again replaces the previous title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTitle {
    pub user: UserId,
    pub month: Month,
    pub title: String,
}
