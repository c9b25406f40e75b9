use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Average rating as shown on the dashboard.
///
/// Serializes either as a bare number or as the "No ratings yet" string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum AverageRatingDto {
    Rated(f64),
    Pending(String),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardStatsDto {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
    pub total_students: usize,
    pub students_booked: usize,
    pub avg_rating: AverageRatingDto,
    pub qty_less: u64,
    pub qty_enough: u64,
    pub qty_excess: u64,
    pub suggestion: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DashboardPageDto {
    pub stats: DashboardStatsDto,
}
