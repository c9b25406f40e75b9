use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::server::{error::AppError, service::auth::AuthService, state::AppState};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Sign out of either role.
///
/// Always succeeds, whatever the session held, and sends the client home.
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect to /")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.registry, &state.admin_credentials, &session)
        .logout()
        .await?;

    Ok(Redirect::to("/"))
}
