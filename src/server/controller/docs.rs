use axum::Json;
use utoipa::OpenApi;

use crate::server::controller::{admin, auth, food, home, student, survey};

#[derive(OpenApi)]
#[openapi(
    info(title = "Mealboard", description = "Meal pre-booking and food feedback"),
    paths(
        home::index,
        student::student_login_page,
        student::student_login,
        student::student_portal,
        food::food_page,
        food::submit_booking,
        survey::survey_page,
        survey::submit_survey,
        admin::admin_login_page,
        admin::admin_login,
        admin::dashboard,
        auth::logout,
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
