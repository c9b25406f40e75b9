//! Dashboard statistics for kitchen staff.

use crate::{
    model::dashboard::{AverageRatingDto, DashboardStatsDto},
    server::model::{
        booking::MealCounts,
        feedback::{QuantityTally, Rating},
    },
};

const NO_RATINGS: &str = "No ratings yet";

/// Mean of all submitted ratings, if there are any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    NoRatings,
    /// Rounded to two decimal places, exact halves to the even neighbour.
    Rated(f64),
}

impl AverageRating {
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        if ratings.is_empty() {
            return Self::NoRatings;
        }

        let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
        let mean = sum as f64 / ratings.len() as f64;

        Self::Rated((mean * 100.0).round_ties_even() / 100.0)
    }

    pub fn into_dto(self) -> AverageRatingDto {
        match self {
            Self::NoRatings => AverageRatingDto::Pending(NO_RATINGS.to_string()),
            Self::Rated(value) => AverageRatingDto::Rated(value),
        }
    }
}

/// What the kitchen should do with portion sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantitySuggestion {
    Reduce,
    Increase,
    Maintain,
}

impl QuantitySuggestion {
    /// Compares "Excess" against "Less" votes; "Enough" votes never tip it.
    ///
    /// Ties, including the all-zero starting state, keep the quantity as is.
    pub fn from_tally(tally: &QuantityTally) -> Self {
        if tally.excess > tally.less {
            Self::Reduce
        } else if tally.less > tally.excess {
            Self::Increase
        } else {
            Self::Maintain
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Reduce => "Reduce quantity to avoid wastage.",
            Self::Increase => "Increase quantity. Students feel it is less.",
            Self::Maintain => "Maintain same quantity.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub meal_counts: MealCounts,
    pub total_students: usize,
    pub students_booked: usize,
    pub average_rating: AverageRating,
    pub quantity: QuantityTally,
    pub suggestion: QuantitySuggestion,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            breakfast: self.meal_counts.breakfast,
            lunch: self.meal_counts.lunch,
            dinner: self.meal_counts.dinner,
            total_students: self.total_students,
            students_booked: self.students_booked,
            avg_rating: self.average_rating.into_dto(),
            qty_less: self.quantity.less,
            qty_enough: self.quantity.enough,
            qty_excess: self.quantity.excess,
            suggestion: self.suggestion.message().to_string(),
        }
    }
}
