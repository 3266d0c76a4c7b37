//! HTTP layer exposing the calendar service as a REST API.
//!
//! Only compiled when the `http-server` feature is enabled.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use auth::{CurrentUser, USER_ID_HEADER};
pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
