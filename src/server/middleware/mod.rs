//! Session wrappers and the guards built on them.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
