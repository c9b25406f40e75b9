//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys
//! that belong to its role. A session carries at most one role at a time:
//! signing in as a student drops the admin flag and vice versa.

use tower_sessions::Session;

use crate::server::{error::AppError, model::student::RegistrationNumber};

// Session key constants
const SESSION_STUDENT_REG_NUMBER: &str = "student:reg_number";
const SESSION_ADMIN_LOGGED_IN: &str = "admin:logged_in";

/// Student identity stored in the session.
pub struct StudentSession<'a> {
    session: &'a Session,
}

impl<'a> StudentSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Signs the student in, replacing any admin login on this session.
    ///
    /// The session ID is rotated so a pre-login cookie cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Registration number stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn set_reg_number(&self, reg_number: &RegistrationNumber) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .remove::<bool>(SESSION_ADMIN_LOGGED_IN)
            .await?;
        self.session
            .insert(SESSION_STUDENT_REG_NUMBER, reg_number.as_str())
            .await?;
        Ok(())
    }

    /// Registration number of the signed-in student.
    ///
    /// # Returns
    /// - `Ok(Some(reg_number))` - A student is signed in
    /// - `Ok(None)` - No student in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_reg_number(&self) -> Result<Option<RegistrationNumber>, AppError> {
        let reg_number = self
            .session
            .get::<String>(SESSION_STUDENT_REG_NUMBER)
            .await?
            .filter(|value| !value.is_empty())
            .map(RegistrationNumber::new_unchecked);

        Ok(reg_number)
    }
}

/// Admin login flag stored in the session.
pub struct AdminSession<'a> {
    session: &'a Session,
}

impl<'a> AdminSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as admin, replacing any student login on it.
    pub async fn set_logged_in(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .remove::<String>(SESSION_STUDENT_REG_NUMBER)
            .await?;
        self.session.insert(SESSION_ADMIN_LOGGED_IN, true).await?;
        Ok(())
    }

    pub async fn is_logged_in(&self) -> Result<bool, AppError> {
        let logged_in = self
            .session
            .get::<bool>(SESSION_ADMIN_LOGGED_IN)
            .await?
            .unwrap_or(false);

        Ok(logged_in)
    }
}

/// Session lifecycle shared by both roles.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Drops every key and deletes the session record from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
