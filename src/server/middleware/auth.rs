use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AdminSession, StudentSession},
    model::student::RegistrationNumber,
};

/// Gatekeeper for the student and admin pages.
///
/// Handlers call it first thing; a failed check propagates as
/// `AppError::AuthErr`, which the error layer turns into a redirect.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Passes when a student is signed in.
    ///
    /// # Returns
    /// - `Ok(RegistrationNumber)` - The signed-in student
    /// - `Err(AppError::AuthErr(AuthError::StudentNotInSession))` - Redirects to `/student_login`
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn require_student(&self) -> Result<RegistrationNumber, AppError> {
        let Some(reg_number) = StudentSession::new(self.session).get_reg_number().await? else {
            return Err(AuthError::StudentNotInSession.into());
        };

        Ok(reg_number)
    }

    /// Passes when the admin flag is set.
    ///
    /// # Returns
    /// - `Ok(())` - Admin is signed in
    /// - `Err(AppError::AuthErr(AuthError::AdminNotInSession))` - Redirects to `/admin_login`
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn require_admin(&self) -> Result<(), AppError> {
        if !AdminSession::new(self.session).is_logged_in().await? {
            return Err(AuthError::AdminNotInSession.into());
        }

        Ok(())
    }
}
