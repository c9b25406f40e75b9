use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A student-only page was requested without a registered student in the session.
    #[error("No student registration number in session")]
    StudentNotInSession,

    /// An admin-only page was requested without the admin flag in the session.
    #[error("Admin is not logged in")]
    AdminNotInSession,
}

impl AuthError {
    /// Login page the client is sent to when this guard fails.
    pub fn login_path(&self) -> &'static str {
        match self {
            Self::StudentNotInSession => "/student_login",
            Self::AdminNotInSession => "/admin_login",
        }
    }
}

/// Converts authorization failures into redirects.
///
/// Gated pages never answer with 401/403: the client is quietly sent to the
/// relevant login page, without an error message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}, redirecting to {}", self, self.login_path());

        Redirect::to(self.login_path()).into_response()
    }
}
