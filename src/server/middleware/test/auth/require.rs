use super::*;

mod require_admin;
mod require_student;
