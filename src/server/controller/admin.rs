use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardPageDto, page::LoginPageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{auth::AuthService, dashboard::DashboardService},
        state::AppState,
        util::form::{form_body, required},
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

const INVALID_CREDENTIALS: &str = "Invalid Username or Password";

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Admin login form.
#[utoipa::path(
    get,
    path = "/admin_login",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Empty login form", body = LoginPageDto)
    ),
)]
pub async fn admin_login_page() -> Json<LoginPageDto> {
    Json(LoginPageDto::default())
}

/// Sign in as kitchen staff.
///
/// # Returns
/// - `303 See Other` - Credentials accepted, redirect to `/dashboard`
/// - `200 OK` - Login form with an inline error
/// - `400 Bad Request` - `username` or `password` missing, or the body is
///   not a decodable form
#[utoipa::path(
    post,
    path = "/admin_login",
    tag = ADMIN_TAG,
    request_body(content = AdminLoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to /dashboard"),
        (status = 200, description = "Credentials rejected", body = LoginPageDto),
        (status = 400, description = "Missing login field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<AdminLoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = form_body(form)?;
    let username = required(form.username, "username")?;
    let password = required(form.password, "password")?;

    let service = AuthService::new(&state.registry, &state.admin_credentials, &session);

    if !service.admin_login(&username, &password).await? {
        return Ok(Json(LoginPageDto {
            error: Some(INVALID_CREDENTIALS.to_string()),
        })
        .into_response());
    }

    Ok(Redirect::to("/dashboard").into_response())
}

/// Today's booking counts and feedback summary.
///
/// # Access Control
/// - Admin session, otherwise redirect to `/admin_login`
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardPageDto),
        (status = 303, description = "Not signed in, redirect to /admin_login")
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<DashboardPageDto>, AppError> {
    AuthGuard::new(&session).require_admin().await?;

    let stats = DashboardService::new(
        &state.registry,
        &state.bookings,
        &state.feedback,
        state.clock.as_ref(),
    )
    .compute_dashboard_stats()
    .await;

    Ok(Json(DashboardPageDto {
        stats: stats.into_dto(),
    }))
}
