use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page model for `/food_survey`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct SurveyPageDto {
    pub message: String,
    pub error: Option<String>,
}
