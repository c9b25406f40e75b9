use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::menu::MenuDto;

/// A student's answer for a single meal slot.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum MealChoice {
    Yes,
    No,
}

impl MealChoice {
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl FromStr for MealChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(format!("'{other}' is not a valid meal choice, expected Yes or No")),
        }
    }
}

impl fmt::Display for MealChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("Yes"),
            Self::No => f.write_str("No"),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub breakfast: MealChoice,
    pub lunch: MealChoice,
    pub dinner: MealChoice,
}

/// Page model for `/food`.
///
/// `existing_booking` is `null` until the student books for today. `result`
/// carries the confirmation after a submission and `error` an inline form
/// error when a selection could not be understood.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FoodPageDto {
    pub day: String,
    pub date: NaiveDate,
    pub menu: MenuDto,
    pub existing_booking: Option<BookingDto>,
    pub result: String,
    pub error: Option<String>,
}
