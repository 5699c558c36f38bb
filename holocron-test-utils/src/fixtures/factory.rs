//! Factory functions for in-memory database models.
//!
//! These build models with standard test values without touching the database, for
//! unit tests of conversions and response mapping.

use crate::model::{CharacterModel, FavouriteModel, PlanetModel, UserModel, VehicleModel};

pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        password: "$2b$04$not.a.real.hash".to_string(),
    }
}

pub fn mock_character_model(id: i32) -> CharacterModel {
    CharacterModel {
        id,
        name: format!("Character {}", id),
        description: None,
    }
}

pub fn mock_planet_model(id: i32) -> PlanetModel {
    PlanetModel {
        id,
        name: format!("Planet {}", id),
        climate: Some("arid".to_string()),
        diameter: Some(10465),
        orbital_period: Some(304),
        rotation_period: Some(23),
    }
}

pub fn mock_vehicle_model(id: i32) -> VehicleModel {
    VehicleModel {
        id,
        name: format!("Vehicle {}", id),
        model: Some("Digger Crawler".to_string()),
        max_atmosphering_speed: Some(30),
    }
}

/// Favourite of a character owned by `user_id`.
pub fn mock_favourite_model(id: i32, user_id: i32, character_id: i32) -> FavouriteModel {
    FavouriteModel {
        id,
        user_id,
        url: Some(format!("/characters/{}", character_id)),
        character_id: Some(character_id),
        planet_id: None,
        vehicle_id: None,
    }
}
