use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{catalog::CatalogKind, favourite::NewFavouriteDto},
    server::controller::{favourite::add_favourite, util::current_user::CurrentUser},
};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::{util::body_json, TestContextExt};

/// Expect 200 with the kind named in the message and the row stored
#[tokio::test]
async fn adds_favourite_planet() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let planet_model = test.catalog().insert_planet("Mustafar").await?;

    let result = add_favourite(
        State(test.into_app_state()),
        CurrentUser(user_model.clone()),
        Path((CatalogKind::Planet, planet_model.id)),
        Json(NewFavouriteDto {
            url: Some("/planets/1".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!("Favorite planet added"));

    let favourites = entity::prelude::Favourite::find().all(&test.db).await?;
    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites[0].user_id, user_model.id);
    assert_eq!(favourites[0].planet_id, Some(planet_model.id));
    assert_eq!(favourites[0].url.as_deref(), Some("/planets/1"));

    Ok(())
}

/// Expect duplicates to be accepted
#[tokio::test]
async fn allows_duplicate_favourites() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let character_model = test.catalog().insert_character("Qui-Gon Jinn").await?;
    let state = test.into_app_state();

    for _ in 0..2 {
        let result = add_favourite(
            State(state.clone()),
            CurrentUser(user_model.clone()),
            Path((CatalogKind::Character, character_model.id)),
            Json(NewFavouriteDto::default()),
        )
        .await;

        assert!(result.is_ok());
    }

    assert_eq!(entity::prelude::Favourite::find().count(&test.db).await?, 2);

    Ok(())
}

/// Expect 404 and no row when the target does not exist
#[tokio::test]
async fn returns_not_found_for_missing_target() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;

    let result = add_favourite(
        State(test.into_app_state()),
        CurrentUser(user_model),
        Path((CatalogKind::Character, 42)),
        Json(NewFavouriteDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "msg": "Character not found" }));
    assert_eq!(entity::prelude::Favourite::find().count(&test.db).await?, 0);

    Ok(())
}
