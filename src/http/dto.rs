//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! View DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    DailyRoutineEntry, DailyViewData, DayCompletion, MonthlyViewData, Routine, RoutineCompletion,
    RoutineInfo, ScheduleItem,
};

/// Request body for creating a routine template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoutineRequest {
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub celebrity: String,
    pub theme: String,
}

impl From<CreateRoutineRequest> for Routine {
    fn from(req: CreateRoutineRequest) -> Self {
        Routine {
            id: None,
            title: req.title,
            sub_title: req.sub_title,
            content: req.content,
            image: req.image,
            video_url: req.video_url,
            category: req.category,
            celebrity: req.celebrity,
            theme: req.theme,
            popular: 0,
        }
    }
}

/// Response for routine creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoutineResponse {
    pub routine_id: i64,
}

/// Routine list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineListResponse {
    pub routines: Vec<RoutineInfo>,
    pub total: usize,
}

/// Request body for enrolling in a routine.
///
/// Dates arrive as ISO-8601 strings and are validated in the handler so a
/// malformed date is a clean 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub start_date: String,
    pub end_date: String,
}

/// Response for enrollment creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub enrollment_id: i64,
    /// Completion records created by the expansion
    pub completions_created: usize,
}

/// Request body for creating a schedule item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for partially updating a schedule item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleItemRequest {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Request body for setting a routine completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionUpdateRequest {
    pub enrollment_id: i64,
    pub completed: bool,
}

/// Request body for setting a monthly title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTitleRequest {
    pub title: String,
}

/// Monthly title response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTitleResponse {
    pub month: String,
    pub title: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}
