use axum::{extract::rejection::FormRejection, Form};

use crate::server::error::AppError;

/// Turns an extracted form body into its fields.
///
/// Handlers take the form as `Result<Form<T>, FormRejection>` so that the
/// session check runs before the body is looked at, then call this.
///
/// # Returns
/// - `Ok(T)` - The decoded form
/// - `Err(AppError::BadRequest)` - Wrong content type or an undecodable body
pub fn form_body<T>(form: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    match form {
        Ok(Form(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Rejected form body: {}", rejection.body_text());
            Err(AppError::BadRequest(rejection.body_text()))
        }
    }
}

/// Unwraps a form field that the page cannot work without.
///
/// # Returns
/// - `Ok(String)` - The submitted value
/// - `Err(AppError::BadRequest)` - The field was absent from the submission
pub fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::missing_field(name))
}
