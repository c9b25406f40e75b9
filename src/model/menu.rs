use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three dishes served on a given weekday.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuDto {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}
