use holocron_test_utils::prelude::*;

use crate::{
    model::catalog::{NewCharacterDto, NewPlanetDto, NewVehicleDto},
    server::data::catalog::{
        character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository,
    },
};
