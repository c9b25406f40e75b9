use argon2::PasswordHash;
use std::{net::SocketAddr, str::FromStr};
use tower_sessions::cookie::Key;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_REGISTRATION_PREFIX: &str = "Y24CM";
const DEFAULT_REGISTRATION_FIRST: u32 = 133;
const DEFAULT_REGISTRATION_LAST: u32 = 198;

/// Upper bound on `REGISTRATION_LAST - REGISTRATION_FIRST + 1`. The allow-list
/// is held in memory as one string per number.
pub const MAX_REGISTRATION_SPAN: u32 = 100_000;

/// Minimum secret length accepted by the cookie signing key.
pub const MIN_SESSION_SECRET_BYTES: usize = 64;

/// Shape of the registration number allow-list: `prefix` followed by every
/// number in `first..=last`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRange {
    pub prefix: String,
    pub first: u32,
    pub last: u32,
}

impl Default for RegistrationRange {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_REGISTRATION_PREFIX.to_string(),
            first: DEFAULT_REGISTRATION_FIRST,
            last: DEFAULT_REGISTRATION_LAST,
        }
    }
}

pub struct Config {
    pub bind_address: SocketAddr,

    pub admin_username: String,
    /// PHC-format Argon2 hash, validated when the config is loaded.
    pub admin_password_hash: String,

    /// Signing key for the session cookie. A random key is generated when
    /// `SESSION_SECRET` is unset, so sessions do not survive a restart.
    pub session_key: Key,
    pub session_secure_cookie: bool,

    pub registration: RegistrationRange,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let admin_username = required("ADMIN_USERNAME")?;
        let admin_password_hash = required("ADMIN_PASSWORD_HASH")?;
        PasswordHash::new(&admin_password_hash)
            .map_err(|e| ConfigError::InvalidPasswordHash(e.to_string()))?;

        let session_key = match lookup("SESSION_SECRET") {
            Some(secret) if secret.len() < MIN_SESSION_SECRET_BYTES => {
                return Err(ConfigError::SessionSecretTooShort {
                    min: MIN_SESSION_SECRET_BYTES,
                    actual: secret.len(),
                }
                .into());
            }
            Some(secret) => Key::from(secret.as_bytes()),
            None => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                Key::generate()
            }
        };

        let bind_address = parse_or(&lookup, "BIND_ADDRESS", || {
            DEFAULT_BIND_ADDRESS.parse().map_err(|e: std::net::AddrParseError| e.to_string())
        })?;

        let registration = RegistrationRange {
            prefix: lookup("REGISTRATION_PREFIX")
                .unwrap_or_else(|| DEFAULT_REGISTRATION_PREFIX.to_string()),
            first: parse_or(&lookup, "REGISTRATION_FIRST", || {
                Ok(DEFAULT_REGISTRATION_FIRST)
            })?,
            last: parse_or(&lookup, "REGISTRATION_LAST", || Ok(DEFAULT_REGISTRATION_LAST))?,
        };
        registration.check()?;

        Ok(Self {
            bind_address,
            admin_username,
            admin_password_hash,
            session_key,
            session_secure_cookie: parse_or(&lookup, "SESSION_SECURE_COOKIE", || Ok(true))?,
            registration,
        })
    }
}

impl RegistrationRange {
    /// Rejects an empty range and one too large to hold in memory.
    fn check(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEnvVar {
            name: "REGISTRATION_LAST".to_string(),
            reason,
        };

        if self.last < self.first {
            return Err(invalid(format!(
                "must not be below REGISTRATION_FIRST ({} < {})",
                self.last, self.first
            )));
        }

        let span = u64::from(self.last - self.first) + 1;
        if span > u64::from(MAX_REGISTRATION_SPAN) {
            return Err(invalid(format!(
                "range of {span} numbers exceeds the limit of {MAX_REGISTRATION_SPAN}"
            )));
        }

        Ok(())
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T, D>(lookup: &F, name: &str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, String>,
{
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    };

    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| invalid(e.to_string())),
        None => default().map_err(invalid),
    }
}
