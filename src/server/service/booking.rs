//! Booking service for today's menu and meal pre-booking.

use chrono::NaiveDate;

use crate::server::{
    data::{booking::BookingRepository, menu::menu_for_day},
    model::{
        booking::{MealSelection, SubmitBookingParam},
        menu::Menu,
        student::RegistrationNumber,
    },
    util::clock::Clock,
};

/// Today's date, weekday name and menu.
#[derive(Debug, Clone)]
pub struct TodaysMenu {
    pub date: NaiveDate,
    pub day: String,
    pub menu: Menu,
}

pub struct BookingService<'a> {
    bookings: &'a BookingRepository,
    clock: &'a dyn Clock,
}

impl<'a> BookingService<'a> {
    pub fn new(bookings: &'a BookingRepository, clock: &'a dyn Clock) -> Self {
        Self { bookings, clock }
    }

    /// Menu for the server's current weekday.
    pub fn get_menu_for_today(&self) -> TodaysMenu {
        let date = self.clock.today();
        let day = date.format("%A").to_string();
        let menu = menu_for_day(&day);

        TodaysMenu { date, day, menu }
    }

    /// Records the selection, replacing any earlier one for the same day.
    ///
    /// # Returns
    /// - `String` - Confirmation listing the booked meals, or the opt-out notice
    pub async fn submit_booking(&self, param: SubmitBookingParam) -> String {
        let confirmation = param.selection.confirmation();

        tracing::debug!(
            "Booking for {} on {}: {:?}",
            param.reg_number,
            param.date,
            param.selection
        );

        self.bookings.upsert(param).await;

        confirmation
    }

    /// The student's booking for `date`, used to pre-fill the form.
    pub async fn get_existing_booking(
        &self,
        reg_number: &RegistrationNumber,
        date: NaiveDate,
    ) -> Option<MealSelection> {
        self.bookings.find(reg_number, date).await
    }
}
