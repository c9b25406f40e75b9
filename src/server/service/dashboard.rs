//! Aggregates the stores into the kitchen dashboard.

use chrono::NaiveDate;

use crate::server::{
    data::{
        booking::BookingRepository, feedback::FeedbackRepository,
        registry::RegistrationRegistry,
    },
    model::{
        booking::MealCounts,
        dashboard::{AverageRating, DashboardStats, QuantitySuggestion},
    },
    util::clock::Clock,
};

pub struct DashboardService<'a> {
    registry: &'a RegistrationRegistry,
    bookings: &'a BookingRepository,
    feedback: &'a FeedbackRepository,
    clock: &'a dyn Clock,
}

impl<'a> DashboardService<'a> {
    pub fn new(
        registry: &'a RegistrationRegistry,
        bookings: &'a BookingRepository,
        feedback: &'a FeedbackRepository,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            registry,
            bookings,
            feedback,
            clock,
        }
    }

    /// Students eating each meal on `date`.
    pub async fn compute_meal_counts(&self, date: NaiveDate) -> MealCounts {
        let (counts, _) = self.bookings.summarize(date).await;
        counts
    }

    /// Everything the dashboard shows, computed for today.
    pub async fn compute_dashboard_stats(&self) -> DashboardStats {
        let (meal_counts, students_booked) = self.bookings.summarize(self.clock.today()).await;
        let feedback = self.feedback.snapshot().await;

        DashboardStats {
            meal_counts,
            total_students: self.registry.count(),
            students_booked,
            average_rating: AverageRating::from_ratings(&feedback.ratings),
            quantity: feedback.tally,
            suggestion: QuantitySuggestion::from_tally(&feedback.tally),
        }
    }
}
