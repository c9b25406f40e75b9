use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::{Arc, LazyLock};
use test_utils::{client::TestClient, error::TestError};
use tower_sessions::cookie::Key;

use crate::server::{
    config::RegistrationRange,
    data::registry::RegistrationRegistry,
    service::auth::{hash_password, AdminCredentials},
    startup::build_app,
    state::AppState,
    util::clock::{Clock, FixedClock},
};

mod food;

const ADMIN_USERNAME: &str = "kitchen";
const ADMIN_PASSWORD: &str = "correct horse battery staple";

static ADMIN_HASH: LazyLock<String> = LazyLock::new(|| hash_password(ADMIN_PASSWORD));

/// Wednesday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
}

/// Fresh app with empty stores. The returned state shares its stores with the
/// app so tests can look inside after a request.
fn setup() -> (TestClient, AppState) {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(today()));
    let state = AppState::new(
        RegistrationRegistry::from_range(&RegistrationRange::default()),
        AdminCredentials::new(ADMIN_USERNAME.to_string(), ADMIN_HASH.clone()),
        clock,
    );

    let app = build_app(state.clone(), Key::generate(), false);

    (TestClient::new(app), state)
}

async fn login_student(client: &mut TestClient, reg_number: &str) -> Result<(), TestError> {
    let response = client
        .post_form("/student_login", &[("reg_number", reg_number)])
        .await?;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    Ok(())
}

async fn login_admin(client: &mut TestClient) -> Result<(), TestError> {
    let response = client
        .post_form(
            "/admin_login",
            &[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)],
        )
        .await?;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    Ok(())
}

/// Asserts the response is a 303 to `path`.
fn assert_redirect(response: &test_utils::client::TestResponse, path: &str) {
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some(path));
}

/// Tests the landing page lists both login pages.
///
/// Expected: 200 with both links
#[tokio::test]
async fn home_offers_both_roles() -> Result<(), TestError> {
    let (mut client, _) = setup();

    let response = client.get("/").await?;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json()?;
    assert_eq!(body["student_login"], "/student_login");
    assert_eq!(body["admin_login"], "/admin_login");

    Ok(())
}

/// Tests every gated page redirects an anonymous client to its login page.
///
/// Expected: 303 to /student_login or /admin_login, no body errors
#[tokio::test]
async fn gated_pages_redirect_anonymous_clients() -> Result<(), TestError> {
    let (mut client, _) = setup();

    for path in ["/student_portal", "/food", "/food_survey"] {
        assert_redirect(&client.get(path).await?, "/student_login");
    }
    assert_redirect(&client.get("/dashboard").await?, "/admin_login");

    Ok(())
}

/// Tests the OpenAPI document is served and lists the page routes.
///
/// Expected: 200 with /food and /dashboard paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let (mut client, _) = setup();

    let response = client.get("/api/docs/openapi.json").await?;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json()?;
    assert!(body["paths"]["/food"].is_object());
    assert!(body["paths"]["/dashboard"].is_object());

    Ok(())
}
