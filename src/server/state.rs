//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the stores and the
//! credentials share their data through `Arc`.

use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{
        booking::BookingRepository, feedback::FeedbackRepository,
        registry::RegistrationRegistry,
    },
    service::auth::AdminCredentials,
    util::clock::{Clock, SystemClock},
};

#[derive(Clone)]
pub struct AppState {
    /// Registration numbers allowed to sign in as students.
    pub registry: RegistrationRegistry,

    /// Meal bookings per student and day.
    pub bookings: BookingRepository,

    /// Survey ratings and quantity tally.
    pub feedback: FeedbackRepository,

    /// Username and password hash checked on admin login.
    pub admin_credentials: AdminCredentials,

    /// Source of "today" for bookings and the dashboard.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state with empty booking and feedback stores.
    pub fn new(
        registry: RegistrationRegistry,
        admin_credentials: AdminCredentials,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            bookings: BookingRepository::new(),
            feedback: FeedbackRepository::new(),
            admin_credentials,
            clock,
        }
    }

    /// Production state: allow-list and credentials from config, wall clock.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RegistrationRegistry::from_range(&config.registration),
            AdminCredentials::new(
                config.admin_username.clone(),
                config.admin_password_hash.clone(),
            ),
            Arc::new(SystemClock),
        )
    }
}
