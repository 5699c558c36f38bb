use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three kinds of catalog entry, also the kinds of thing a user can favourite.
///
/// Serialized as the plural path segment used in the API (`characters`, `planets`,
/// `vehicles`), so it can be taken straight from a route path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CatalogKind {
    #[serde(rename = "characters")]
    Character,
    #[serde(rename = "planets")]
    Planet,
    #[serde(rename = "vehicles")]
    Vehicle,
}

impl CatalogKind {
    /// Lowercase singular name, as used in response messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }

    /// Capitalized singular name, for messages that start with the kind.
    pub fn title(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
}

/// Body of `POST /characters`; missing descriptive fields are stored as null.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewCharacterDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewPlanetDto {
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewVehicleDto {
    pub name: String,
    pub model: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
}
