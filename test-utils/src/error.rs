use thiserror::Error;

/// Errors raised while setting up or driving a test.
#[derive(Error, Debug)]
pub enum TestError {
    /// The request could not be built (bad URI or header).
    #[error(transparent)]
    Http(#[from] axum::http::Error),

    /// The response body could not be collected.
    #[error(transparent)]
    Body(#[from] axum::Error),

    /// The response body was not the expected JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
