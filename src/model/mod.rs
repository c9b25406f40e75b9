//! Wire-level page models shared between the HTTP layer and whatever renders it.

pub mod api;
pub mod booking;
pub mod dashboard;
pub mod feedback;
pub mod menu;
pub mod page;
