//! HTTP handlers.
//!
//! Handlers check the session first, translate form fields into domain
//! parameters, call a service and answer with a JSON page model or a
//! redirect.

pub mod admin;
pub mod auth;
pub mod docs;
pub mod food;
pub mod home;
pub mod student;
pub mod survey;

#[cfg(test)]
mod test;
