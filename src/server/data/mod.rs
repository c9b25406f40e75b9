//! In-memory stores.
//!
//! Each store owns its state behind its own lock and is cheap to clone, so
//! `AppState` can hand a copy to every request. Nothing here outlives the
//! process; a persistent backend would slot in behind the same methods.

pub mod booking;
pub mod feedback;
pub mod menu;
pub mod registry;

#[cfg(test)]
mod test;
