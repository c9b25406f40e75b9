use chrono::NaiveDate;

use crate::{
    model::booking::MealChoice,
    server::{
        config::RegistrationRange,
        data::{
            booking::BookingRepository, feedback::FeedbackRepository, menu,
            registry::RegistrationRegistry,
        },
        model::{
            booking::{MealSelection, SubmitBookingParam},
            feedback::{QuantityFeedback, SubmitFeedbackParam},
            student::RegistrationNumber,
        },
    },
};


fn registry() -> RegistrationRegistry {
    RegistrationRegistry::from_range(&RegistrationRange::default())
}

fn student(id: &str) -> RegistrationNumber {
    registry().lookup(id).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn selection(breakfast: MealChoice, lunch: MealChoice, dinner: MealChoice) -> MealSelection {
    MealSelection {
        breakfast,
        lunch,
        dinner,
    }
}
