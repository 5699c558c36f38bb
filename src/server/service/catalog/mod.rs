//! Catalog service layer.
//!
//! Reads and creates characters, planets and vehicles. Names are unique per kind, which
//! is checked up front so a duplicate answers with a domain error instead of a
//! constraint violation. A concurrent create that slips past the check still hits the
//! unique index, and that violation maps to the same domain error.


use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::catalog::{
        CatalogKind, CharacterDto, NewCharacterDto, NewPlanetDto, NewVehicleDto, PlanetDto,
        VehicleDto,
    },
    server::{
        data::{
            catalog::{
                character::CharacterRepository, planet::PlanetRepository,
                vehicle::VehicleRepository,
            },
            is_unique_violation,
        },
        error::{catalog::CatalogError, Error},
        model::db::{CharacterModel, PlanetModel, VehicleModel},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Gets a character by ID
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::CatalogError(CatalogError::NotFound))` - No character with that ID
    pub async fn get_character(&self, id: i32) -> Result<CharacterDto, Error> {
        let Some(character) = CharacterRepository::new(self.db).get_by_id(id).await? else {
            return Err(CatalogError::NotFound {
                kind: CatalogKind::Character,
                id,
            }
            .into());
        };

        Ok(character.into())
    }

    /// Adds a character unless one with the same name already exists
    pub async fn create_character(&self, character: NewCharacterDto) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        if character_repo.find_by_name(&character.name).await?.is_some() {
            return Err(CatalogError::NameTaken {
                kind: CatalogKind::Character,
                name: character.name,
            }
            .into());
        }

        let name = character.name.clone();
        let character = character_repo
            .create(character)
            .await
            .map_err(|e| name_conflict(e, CatalogKind::Character, name))?;

        tracing::info!("Added character ID {} ({})", character.id, character.name);

        Ok(character.into())
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, id: i32) -> Result<PlanetDto, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(id).await? else {
            return Err(CatalogError::NotFound {
                kind: CatalogKind::Planet,
                id,
            }
            .into());
        };

        Ok(planet.into())
    }

    pub async fn create_planet(&self, planet: NewPlanetDto) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        if planet_repo.find_by_name(&planet.name).await?.is_some() {
            return Err(CatalogError::NameTaken {
                kind: CatalogKind::Planet,
                name: planet.name,
            }
            .into());
        }

        let name = planet.name.clone();
        let planet = planet_repo
            .create(planet)
            .await
            .map_err(|e| name_conflict(e, CatalogKind::Planet, name))?;

        tracing::info!("Added planet ID {} ({})", planet.id, planet.name);

        Ok(planet.into())
    }

    pub async fn get_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    pub async fn get_vehicle(&self, id: i32) -> Result<VehicleDto, Error> {
        let Some(vehicle) = VehicleRepository::new(self.db).get_by_id(id).await? else {
            return Err(CatalogError::NotFound {
                kind: CatalogKind::Vehicle,
                id,
            }
            .into());
        };

        Ok(vehicle.into())
    }

    pub async fn create_vehicle(&self, vehicle: NewVehicleDto) -> Result<VehicleDto, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if vehicle_repo.find_by_name(&vehicle.name).await?.is_some() {
            return Err(CatalogError::NameTaken {
                kind: CatalogKind::Vehicle,
                name: vehicle.name,
            }
            .into());
        }

        let name = vehicle.name.clone();
        let vehicle = vehicle_repo
            .create(vehicle)
            .await
            .map_err(|e| name_conflict(e, CatalogKind::Vehicle, name))?;

        tracing::info!("Added vehicle ID {} ({})", vehicle.id, vehicle.name);

        Ok(vehicle.into())
    }

    /// Checks whether the `kind` entry with ID `id` exists
    pub async fn exists(&self, kind: CatalogKind, id: i32) -> Result<bool, Error> {
        let exists = match kind {
            CatalogKind::Character => CharacterRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
            CatalogKind::Planet => PlanetRepository::new(self.db).get_by_id(id).await?.is_some(),
            CatalogKind::Vehicle => VehicleRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}

/// Maps a unique index violation on create to [`CatalogError::NameTaken`]
fn name_conflict(err: DbErr, kind: CatalogKind, name: String) -> Error {
    if is_unique_violation(&err) {
        CatalogError::NameTaken { kind, name }.into()
    } else {
        err.into()
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            description: character.description,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            diameter: planet.diameter,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
        }
    }
}
