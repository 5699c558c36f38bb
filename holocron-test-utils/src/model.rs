//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main holocron crate so fixtures and tests read the same.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

pub type VehicleModel = entity::vehicle::Model;

pub type FavouriteModel = entity::favourite::Model;
