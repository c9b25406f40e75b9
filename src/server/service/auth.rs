//! Student and admin sign-in.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use std::sync::Arc;
use tower_sessions::Session;

use crate::server::{
    data::registry::RegistrationRegistry,
    error::AppError,
    middleware::session::{AdminSession, AuthSession, StudentSession},
    model::student::RegistrationNumber,
};

/// Configured admin account.
///
/// Only the Argon2 PHC hash of the password is held; the plaintext never
/// leaves the request that submitted it.
#[derive(Clone)]
pub struct AdminCredentials {
    username: Arc<str>,
    password_hash: Arc<str>,
}

impl AdminCredentials {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Checks a submitted username and password.
    ///
    /// The password is always verified, even for an unknown username, so both
    /// failures take the same time. Argon2 is CPU bound and runs on the
    /// blocking pool.
    ///
    /// # Returns
    /// - `Ok(true)` - Both username and password match
    /// - `Ok(false)` - Either one does not match
    /// - `Err(AppError::InternalError(_))` - The stored hash is unusable or the
    ///   blocking task failed
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let username_matches = *self.username == *username;
        let password_hash = Arc::clone(&self.password_hash);
        let password = password.to_owned();

        let password_matches = tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| AppError::InternalError(format!("Invalid admin password hash: {e}")))?;

            Ok::<_, AppError>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
            )
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))??;

        Ok(username_matches && password_matches)
    }
}

/// Hashes a password into the PHC format expected in `ADMIN_PASSWORD_HASH`.
#[cfg(test)]
pub fn hash_password(password: &str) -> String {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

/// Service handling sign-in and sign-out for both roles.
pub struct AuthService<'a> {
    registry: &'a RegistrationRegistry,
    admin: &'a AdminCredentials,
    session: &'a Session,
}

impl<'a> AuthService<'a> {
    pub fn new(
        registry: &'a RegistrationRegistry,
        admin: &'a AdminCredentials,
        session: &'a Session,
    ) -> Self {
        Self {
            registry,
            admin,
            session,
        }
    }

    /// Signs a student in when `input` is on the allow-list.
    ///
    /// # Returns
    /// - `Ok(Some(RegistrationNumber))` - Valid identifier, stored in the session
    /// - `Ok(None)` - Unknown identifier, session untouched
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn student_login(&self, input: &str) -> Result<Option<RegistrationNumber>, AppError> {
        let Some(reg_number) = self.registry.lookup(input) else {
            tracing::debug!("Rejected student login for {:?}", input);
            return Ok(None);
        };

        StudentSession::new(self.session)
            .set_reg_number(&reg_number)
            .await?;

        tracing::info!("Student {} logged in", reg_number);

        Ok(Some(reg_number))
    }

    /// Signs the admin in when the credentials match.
    ///
    /// # Returns
    /// - `Ok(true)` - Credentials matched, admin flag stored in the session
    /// - `Ok(false)` - Credentials rejected, session untouched
    /// - `Err(AppError)` - Verification or session write failed
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if !self.admin.verify(username, password).await? {
            tracing::warn!("Failed admin login attempt for username {:?}", username);
            return Ok(false);
        }

        AdminSession::new(self.session).set_logged_in().await?;

        tracing::info!("Admin logged in");

        Ok(true)
    }

    /// Ends whatever login the session holds.
    pub async fn logout(&self) -> Result<(), AppError> {
        AuthSession::new(self.session).clear().await
    }
}
