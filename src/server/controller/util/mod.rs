//! Helpers shared by controllers.

pub mod current_user;
