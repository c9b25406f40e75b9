//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the stores. They work with domain
//! models, apply the booking and feedback rules and compute dashboard
//! statistics; controllers only translate between forms, sessions and DTOs.

pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod feedback;
