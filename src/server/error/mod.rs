//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. Authorization
//! failures never surface as error pages: `AuthError` turns into a redirect to
//! the matching login page. Validation problems that belong on a form are not
//! errors at all; handlers put them on the page model instead.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing student or admin session.
    ///
    /// Delegates to `AuthError::into_response()`, which redirects.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged, the client gets a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a form that arrived without one of its fields.
    pub fn missing_field(name: &str) -> Self {
        Self::BadRequest(format!("Missing form field: {name}"))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - For `AuthErr`, pointing at the relevant login page
/// - 400 Bad Request - For `BadRequest`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details
/// never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::missing_field("rating").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let response = AppError::InternalError("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_error_redirects_instead_of_failing() {
        let response = AppError::from(AuthError::AdminNotInSession).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/admin_login");
    }
}
