use axum::Json;

use crate::model::page::HomePageDto;

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// Landing page offering the student and admin entry points.
#[utoipa::path(
    get,
    path = "/",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Role selection", body = HomePageDto)
    ),
)]
pub async fn index() -> Json<HomePageDto> {
    Json(HomePageDto {
        student_login: "/student_login".to_string(),
        admin_login: "/admin_login".to_string(),
    })
}
