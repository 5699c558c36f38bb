use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::CatalogKind,
        favourite::{FavouritesDto, NewFavouriteDto},
    },
    server::{
        controller::util::current_user::CurrentUser, error::Error, model::app::AppState,
        service::favourite::FavouriteService,
    },
};

pub static FAVOURITE_TAG: &str = "favourite";

/// List the logged in user's favourites
#[utoipa::path(
    get,
    path = "/user/favorites",
    tag = FAVOURITE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favourites ordered by ID", body = FavouritesDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let favourite = FavouriteService::new(&state.db)
        .get_favourites(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavouritesDto {
            msg: "ok".to_string(),
            favourite,
        }),
    ))
}

/// Favourite a character, planet or vehicle
#[utoipa::path(
    post,
    path = "/user/favorites/{kind}/{id}",
    tag = FAVOURITE_TAG,
    security(("bearer_auth" = [])),
    params(
        ("kind" = CatalogKind, Path, description = "Kind of entry: characters, planets or vehicles"),
        ("id" = i32, Path, description = "ID of the entry")
    ),
    request_body = NewFavouriteDto,
    responses(
        (status = 200, description = "Favourite added", body = String, example = json!("Favorite character added")),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favourite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((kind, id)): Path<(CatalogKind, i32)>,
    Json(favourite): Json<NewFavouriteDto>,
) -> Result<impl IntoResponse, Error> {
    FavouriteService::new(&state.db)
        .add_favourite(user.id, kind, id, favourite.url)
        .await?;

    Ok((StatusCode::OK, Json(format!("Favorite {} added", kind))))
}

/// Remove a favourite
///
/// When the same entry was favourited more than once only the oldest favourite is removed.
#[utoipa::path(
    delete,
    path = "/user/favorites/{kind}/{id}",
    tag = FAVOURITE_TAG,
    security(("bearer_auth" = [])),
    params(
        ("kind" = CatalogKind, Path, description = "Kind of entry: characters, planets or vehicles"),
        ("id" = i32, Path, description = "ID of the entry")
    ),
    responses(
        (status = 200, description = "Favourite removed", body = String, example = json!("Favorite character deleted")),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "No such favourite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favourite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((kind, id)): Path<(CatalogKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavouriteService::new(&state.db)
        .remove_favourite(user.id, kind, id)
        .await?;

    Ok((StatusCode::OK, Json(format!("Favorite {} deleted", kind))))
}
