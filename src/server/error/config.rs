use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// `ADMIN_PASSWORD_HASH` is not a PHC-format Argon2 hash.
    #[error("ADMIN_PASSWORD_HASH is not a valid password hash: {0}")]
    InvalidPasswordHash(String),

    /// `SESSION_SECRET` is too short to derive a signing key from.
    #[error("SESSION_SECRET must be at least {min} bytes, got {actual}")]
    SessionSecretTooShort {
        /// Minimum accepted length in bytes
        min: usize,
        /// Length of the provided secret
        actual: usize,
    },
}
