pub mod clock;
pub mod form;
