use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Landing page: where each role goes to sign in.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HomePageDto {
    pub student_login: String,
    pub admin_login: String,
}

/// Shared by the student and admin login pages.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct LoginPageDto {
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StudentPortalDto {
    pub reg_number: String,
}
