//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};

use super::auth::CurrentUser;
use super::dto::{
    CompletionUpdateRequest, CreateRoutineRequest, CreateRoutineResponse,
    CreateScheduleItemRequest, EnrollRequest, EnrollResponse, HealthResponse,
    MonthlyTitleRequest, MonthlyTitleResponse, RoutineListResponse, UpdateScheduleItemRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DailyViewData, EnrollmentId, Month, MonthlyViewData, Routine, RoutineCompletion, RoutineId,
    ScheduleItem, ScheduleItemId,
};
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse an ISO-8601 (`YYYY-MM-DD`) date path/body parameter.
fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid date format: {}", raw)))
}

/// Parse a `YYYY-MM` month path parameter.
fn parse_month(raw: &str) -> Result<Month, AppError> {
    raw.parse().map_err(|e| AppError::BadRequest(e))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Routine Templates
// =============================================================================

/// GET /v1/routines
///
/// List all routine templates.
pub async fn list_routines(State(state): State<AppState>) -> HandlerResult<RoutineListResponse> {
    let routines = db_services::list_routines(state.repository.as_ref()).await?;
    let total = routines.len();

    Ok(Json(RoutineListResponse { routines, total }))
}

/// POST /v1/routines
///
/// Create a new routine template.
pub async fn create_routine(
    State(state): State<AppState>,
    Json(request): Json<CreateRoutineRequest>,
) -> Result<(StatusCode, Json<CreateRoutineResponse>), AppError> {
    let routine: Routine = request.into();
    let routine_id = db_services::store_routine(state.repository.as_ref(), &routine).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRoutineResponse {
            routine_id: routine_id.value(),
        }),
    ))
}

/// GET /v1/routines/{routine_id}
///
/// Fetch a single routine template.
pub async fn get_routine(
    State(state): State<AppState>,
    Path(routine_id): Path<i64>,
) -> HandlerResult<Routine> {
    let routine =
        db_services::get_routine(state.repository.as_ref(), RoutineId::new(routine_id)).await?;
    Ok(Json(routine))
}

/// POST /v1/routines/{routine_id}/enroll
///
/// Enroll the current user in a routine over a date range. Expands the range
/// into one completion record per day.
pub async fn enroll_routine(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(routine_id): Path<i64>,
    Json(request): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<EnrollResponse>), AppError> {
    let start_date = parse_date(&request.start_date)?;
    let end_date = parse_date(&request.end_date)?;
    let today = Utc::now().date_naive();

    let outcome = services::enroll_routine(
        state.repository.as_ref(),
        user,
        RoutineId::new(routine_id),
        start_date,
        end_date,
        today,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollResponse {
            enrollment_id: outcome.enrollment_id.value(),
            completions_created: outcome.completions_created,
        }),
    ))
}

// =============================================================================
// Calendar Views
// =============================================================================

/// GET /v1/calendar/daily/{date}
///
/// Daily view: schedule items and active enrollments for the date.
pub async fn get_daily_view(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(date): Path<String>,
) -> HandlerResult<DailyViewData> {
    let date = parse_date(&date)?;
    let view = services::daily_view(state.repository.as_ref(), user, date).await?;
    Ok(Json(view))
}

/// GET /v1/calendar/monthly/{month}
///
/// Monthly view: per-day completion rollup for the month.
pub async fn get_monthly_view(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(month): Path<String>,
) -> HandlerResult<MonthlyViewData> {
    let month = parse_month(&month)?;
    let view = services::monthly_view(state.repository.as_ref(), user, month).await?;
    Ok(Json(view))
}

// =============================================================================
// Schedule Items
// =============================================================================

/// POST /v1/calendar/daily/{date}/schedules
///
/// Create a personal schedule item for the date.
pub async fn create_schedule_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(date): Path<String>,
    Json(request): Json<CreateScheduleItemRequest>,
) -> Result<(StatusCode, Json<ScheduleItem>), AppError> {
    let date = parse_date(&date)?;
    let item = db_services::create_schedule_item(
        state.repository.as_ref(),
        user,
        date,
        request.title,
        request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /v1/calendar/daily/{date}/schedules
///
/// Partially update one of the user's schedule items on the date.
pub async fn update_schedule_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(date): Path<String>,
    Json(request): Json<UpdateScheduleItemRequest>,
) -> HandlerResult<ScheduleItem> {
    let date = parse_date(&date)?;
    let patch = crate::db::ScheduleItemPatch {
        title: request.title,
        description: request.description,
        completed: request.completed,
    };
    let item = db_services::update_schedule_item(
        state.repository.as_ref(),
        user,
        date,
        ScheduleItemId::new(request.id),
        patch,
    )
    .await?;

    Ok(Json(item))
}

// =============================================================================
// Routine Completions
// =============================================================================

/// PATCH /v1/calendar/daily/{date}/completions
///
/// Set the `completed` flag of a routine completion record.
pub async fn update_completion(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(date): Path<String>,
    Json(request): Json<CompletionUpdateRequest>,
) -> HandlerResult<RoutineCompletion> {
    let date = parse_date(&date)?;
    let completion = db_services::set_completion(
        state.repository.as_ref(),
        user,
        EnrollmentId::new(request.enrollment_id),
        date,
        request.completed,
    )
    .await?;

    Ok(Json(completion))
}

// =============================================================================
// Monthly Titles
// =============================================================================

/// GET /v1/calendar/monthly/{month}/title
///
/// Fetch the user's title for the month. 404 when unset.
pub async fn get_monthly_title(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(month): Path<String>,
) -> HandlerResult<MonthlyTitleResponse> {
    let month = parse_month(&month)?;
    let title = db_services::get_monthly_title(state.repository.as_ref(), user, month)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No title set for month {}", month)))?;

    Ok(Json(MonthlyTitleResponse {
        month: title.month.to_string(),
        title: title.title,
    }))
}

/// PUT /v1/calendar/monthly/{month}/title
///
/// Set or replace the user's title for the month.
pub async fn set_monthly_title(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(month): Path<String>,
    Json(request): Json<MonthlyTitleRequest>,
) -> HandlerResult<MonthlyTitleResponse> {
    let month = parse_month(&month)?;
    let title =
        db_services::set_monthly_title(state.repository.as_ref(), user, month, request.title)
            .await?;

    Ok(Json(MonthlyTitleResponse {
        month: title.month.to_string(),
        title: title.title,
    }))
}
