//! Service layer for business logic and orchestration.
//!
//! This module contains the logic that spans records: enrollment expansion
//! and calendar aggregation. Plain record CRUD lives in [`crate::db::services`].

pub mod calendar;

pub mod enrollment;

pub use calendar::{daily_view, monthly_view};
pub use enrollment::{enroll_routine, expand_enrollment, EnrollmentOutcome};


#[cfg(test)]
#[path = "calendar_tests.rs"]
mod calendar_tests;
