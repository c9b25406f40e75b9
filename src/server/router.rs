use axum::{routing::get, Router};

use crate::server::{
    controller::{
        admin::{admin_login, admin_login_page, dashboard},
        auth::logout,
        docs::openapi,
        food::{food_page, submit_booking},
        home::index,
        student::{student_login, student_login_page, student_portal},
        survey::{submit_survey, survey_page},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/student_login", get(student_login_page).post(student_login))
        .route("/student_portal", get(student_portal))
        .route("/food", get(food_page).post(submit_booking))
        .route("/food_survey", get(survey_page).post(submit_survey))
        .route("/admin_login", get(admin_login_page).post(admin_login))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
        .route("/api/docs/openapi.json", get(openapi))
}
