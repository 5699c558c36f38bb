use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        catalog::{
            CharacterDto, NewCharacterDto, NewPlanetDto, NewVehicleDto, PlanetDto, VehicleDto,
        },
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static CATALOG_TAG: &str = "catalog";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Characters ordered by ID", body = ResultDto<Vec<CharacterDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).get_characters().await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(characters))))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = ResultDto<CharacterDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db).get_character(id).await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(character))))
}

/// Add a character
#[utoipa::path(
    post,
    path = "/characters",
    tag = CATALOG_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 200, description = "Character added", body = String, example = json!("Character added")),
        (status = 401, description = "A character with that name exists", body = ErrorDto),
        (status = 422, description = "Body is missing the name"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(character): Json<NewCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .create_character(character)
        .await?;

    Ok((StatusCode::OK, Json("Character added")))
}

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Planets ordered by ID", body = ResultDto<Vec<PlanetDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(planets))))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = ResultDto<PlanetDto>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(planet))))
}

/// Add a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = CATALOG_TAG,
    request_body = NewPlanetDto,
    responses(
        (status = 200, description = "Planet added", body = String, example = json!("Planet added")),
        (status = 401, description = "A planet with that name exists", body = ErrorDto),
        (status = 422, description = "Body is missing the name"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(planet): Json<NewPlanetDto>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db).create_planet(planet).await?;

    Ok((StatusCode::OK, Json("Planet added")))
}

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Vehicles ordered by ID", body = ResultDto<Vec<VehicleDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db).get_vehicles().await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(vehicles))))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle found", body = ResultDto<VehicleDto>),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = CatalogService::new(&state.db).get_vehicle(id).await?;

    Ok((StatusCode::OK, Json(ResultDto::ok(vehicle))))
}

/// Add a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = CATALOG_TAG,
    request_body = NewVehicleDto,
    responses(
        (status = 200, description = "Vehicle added", body = String, example = json!("Vehicle added")),
        (status = 401, description = "A vehicle with that name exists", body = ErrorDto),
        (status = 422, description = "Body is missing the name"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(vehicle): Json<NewVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .create_vehicle(vehicle)
        .await?;

    Ok((StatusCode::OK, Json("Vehicle added")))
}
