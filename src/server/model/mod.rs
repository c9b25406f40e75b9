//! Server-side domain models and parameter types.
//!
//! Domain models are what the stores hold and the services compute with. They
//! are converted to the wire-level DTOs in `crate::model` at the controller
//! boundary via `into_dto`.

pub mod booking;
pub mod dashboard;
pub mod feedback;
pub mod menu;
pub mod student;
