//! Request identity extraction.
//!
//! Authentication itself is an upstream concern: the gateway in front of
//! this service authenticates the caller and forwards the user's numeric ID
//! in the `x-user-id` header. This extractor is the only place that header
//! name appears.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::AppError;
use crate::api::UserId;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user for the current request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::BadRequest(format!("Missing {} header", USER_ID_HEADER)))?;

        let id: i64 = raw
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {} header", USER_ID_HEADER)))?;

        Ok(CurrentUser(UserId::new(id)))
    }
}
