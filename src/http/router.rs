//! Router configuration for the REST API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Maximum request body size (1 MiB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Create the application router with all API routes.
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route(
            "/routines",
            get(handlers::list_routines).post(handlers::create_routine),
        )
        .route("/routines/{routine_id}", get(handlers::get_routine))
        .route(
            "/routines/{routine_id}/enroll",
            post(handlers::enroll_routine),
        )
        .route("/calendar/daily/{date}", get(handlers::get_daily_view))
        .route(
            "/calendar/daily/{date}/schedules",
            post(handlers::create_schedule_item).patch(handlers::update_schedule_item),
        )
        .route(
            "/calendar/daily/{date}/completions",
            patch(handlers::update_completion),
        )
        .route("/calendar/monthly/{month}", get(handlers::get_monthly_view))
        .route(
            "/calendar/monthly/{month}/title",
            get(handlers::get_monthly_title).put(handlers::set_monthly_title),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
