//! Test fixture modules for database record creation.
//!
//! - `user` - user accounts with bcrypt-hashed passwords
//! - `catalog` - characters, planets and vehicles
//! - `favourite` - favourites linking users to catalog entries
//! - `factory` - in-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favourite;
pub mod user;
