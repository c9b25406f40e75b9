use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, page::{LoginPageDto, StudentPortalDto}},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState, util::form::form_body,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

const INVALID_REG_NUMBER: &str = "Invalid registration number. Please try again.";

#[derive(Deserialize, ToSchema)]
pub struct StudentLoginForm {
    /// Missing is treated the same as an empty string.
    pub reg_number: Option<String>,
}

/// Student login form.
#[utoipa::path(
    get,
    path = "/student_login",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Empty login form", body = LoginPageDto)
    ),
)]
pub async fn student_login_page() -> Json<LoginPageDto> {
    Json(LoginPageDto::default())
}

/// Sign in with a registration number.
///
/// # Returns
/// - `303 See Other` - Valid registration number, redirect to `/student_portal`
/// - `200 OK` - Login form with an inline error
/// - `400 Bad Request` - Body is not a decodable form
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    post,
    path = "/student_login",
    tag = STUDENT_TAG,
    request_body(content = StudentLoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to /student_portal"),
        (status = 200, description = "Unknown registration number", body = LoginPageDto),
        (status = 400, description = "Malformed form body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<StudentLoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = form_body(form)?;
    let service = AuthService::new(&state.registry, &state.admin_credentials, &session);

    let input = form.reg_number.unwrap_or_default();

    if service.student_login(&input).await?.is_none() {
        return Ok(Json(LoginPageDto {
            error: Some(INVALID_REG_NUMBER.to_string()),
        })
        .into_response());
    }

    Ok(Redirect::to("/student_portal").into_response())
}

/// Portal linking to booking and the survey.
///
/// # Access Control
/// - Student session, otherwise redirect to `/student_login`
#[utoipa::path(
    get,
    path = "/student_portal",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Signed-in student", body = StudentPortalDto),
        (status = 303, description = "Not signed in, redirect to /student_login")
    ),
)]
pub async fn student_portal(session: Session) -> Result<Json<StudentPortalDto>, AppError> {
    let reg_number = AuthGuard::new(&session).require_student().await?;

    Ok(Json(StudentPortalDto {
        reg_number: reg_number.into_string(),
    }))
}
