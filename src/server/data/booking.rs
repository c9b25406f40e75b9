//! Booking store.
//!
//! Holds at most one meal selection per (student, date). Submitting again for
//! the same day replaces the earlier selection; nothing is ever deleted.

use chrono::NaiveDate;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::server::model::{
    booking::{MealCounts, MealSelection, SubmitBookingParam},
    student::RegistrationNumber,
};

type BookingsByDate = HashMap<NaiveDate, MealSelection>;

#[derive(Clone, Default)]
pub struct BookingRepository {
    bookings: Arc<RwLock<HashMap<RegistrationNumber, BookingsByDate>>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the selection for the student and date, replacing any earlier one.
    ///
    /// # Returns
    /// The selection that was replaced, if the student had already booked that day.
    pub async fn upsert(&self, param: SubmitBookingParam) -> Option<MealSelection> {
        let mut bookings = self.bookings.write().await;

        bookings
            .entry(param.reg_number)
            .or_default()
            .insert(param.date, param.selection)
    }

    /// Selection the student made for `date`, if any.
    pub async fn find(
        &self,
        reg_number: &RegistrationNumber,
        date: NaiveDate,
    ) -> Option<MealSelection> {
        let bookings = self.bookings.read().await;

        bookings
            .get(reg_number)
            .and_then(|by_date| by_date.get(&date))
            .copied()
    }

    /// Per-meal head count for `date` together with the number of students
    /// who booked at all that day, read under a single lock.
    pub async fn summarize(&self, date: NaiveDate) -> (MealCounts, usize) {
        let bookings = self.bookings.read().await;

        let mut counts = MealCounts::default();
        let mut students = 0;

        for selection in bookings.values().filter_map(|by_date| by_date.get(&date)) {
            counts.add(selection);
            students += 1;
        }

        (counts, students)
    }
}
