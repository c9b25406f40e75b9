//! Booking domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::booking::{BookingDto, MealChoice},
    server::model::student::RegistrationNumber,
};

/// One of the three daily meal slots, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

/// Yes/No answers for the three meals of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSelection {
    pub breakfast: MealChoice,
    pub lunch: MealChoice,
    pub dinner: MealChoice,
}

impl MealSelection {
    pub fn choice(&self, meal: Meal) -> MealChoice {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }

    /// Meals answered with Yes, in serving order.
    pub fn booked_meals(&self) -> Vec<Meal> {
        Meal::ALL
            .into_iter()
            .filter(|meal| self.choice(*meal).is_yes())
            .collect()
    }

    /// Human-readable acknowledgement of a submitted selection.
    pub fn confirmation(&self) -> String {
        let meals = self.booked_meals();

        if meals.is_empty() {
            return "⚠️ You have opted out of all meals for today".to_string();
        }

        let labels: Vec<&str> = meals.into_iter().map(Meal::label).collect();
        format!("✅ Booking confirmed for: {}", labels.join(", "))
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            breakfast: self.breakfast,
            lunch: self.lunch,
            dinner: self.dinner,
        }
    }
}

/// Parameters for recording a student's meal selection for a day.
#[derive(Debug, Clone)]
pub struct SubmitBookingParam {
    pub reg_number: RegistrationNumber,
    pub date: NaiveDate,
    pub selection: MealSelection,
}

/// Number of students eating each meal on a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealCounts {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
}

impl MealCounts {
    /// Adds one head to every meal the selection says Yes to.
    pub fn add(&mut self, selection: &MealSelection) {
        for meal in selection.booked_meals() {
            match meal {
                Meal::Breakfast => self.breakfast += 1,
                Meal::Lunch => self.lunch += 1,
                Meal::Dinner => self.dinner += 1,
            }
        }
    }
}
