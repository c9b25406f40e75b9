//! Feedback domain models and parameters.

use std::str::FromStr;

/// Lowest and highest accepted rating.
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// A food quality rating within `RATING_RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("Rating must be a whole number, got '{raw}'"))?;

        if !RATING_RANGE.contains(&value) {
            return Err(format!(
                "Rating must be between {} and {}, got {value}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            ));
        }

        Ok(Self(value as u8))
    }
}

/// How students perceived the portion size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityFeedback {
    Less,
    Enough,
    Excess,
}

impl FromStr for QuantityFeedback {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Less" => Ok(Self::Less),
            "Enough" => Ok(Self::Enough),
            "Excess" => Ok(Self::Excess),
            other => Err(format!(
                "'{other}' is not a valid quantity, expected Less, Enough or Excess"
            )),
        }
    }
}

/// Running count of each quantity category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantityTally {
    pub less: u64,
    pub enough: u64,
    pub excess: u64,
}

impl QuantityTally {
    pub fn record(&mut self, quantity: QuantityFeedback) {
        match quantity {
            QuantityFeedback::Less => self.less += 1,
            QuantityFeedback::Enough => self.enough += 1,
            QuantityFeedback::Excess => self.excess += 1,
        }
    }
}

/// Parameters for a single survey submission.
#[derive(Debug, Clone, Copy)]
pub struct SubmitFeedbackParam {
    pub rating: Rating,
    pub quantity: QuantityFeedback,
}

/// Copy of the feedback store at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSnapshot {
    pub ratings: Vec<Rating>,
    pub tally: QuantityTally,
}
