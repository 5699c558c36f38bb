use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::catalog::CatalogKind,
    server::controller::{favourite::remove_favourite, util::current_user::CurrentUser},
};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::{util::body_json, TestContextExt};

/// Expect 200 and exactly one row removed
#[tokio::test]
async fn removes_one_favourite() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let vehicle_model = test.catalog().insert_vehicle("TIE fighter").await?;
    test.favourite()
        .insert_favourite_vehicle(user_model.id, vehicle_model.id)
        .await?;
    test.favourite()
        .insert_favourite_vehicle(user_model.id, vehicle_model.id)
        .await?;

    let result = remove_favourite(
        State(test.into_app_state()),
        CurrentUser(user_model),
        Path((CatalogKind::Vehicle, vehicle_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!("Favorite vehicle deleted"));
    assert_eq!(entity::prelude::Favourite::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect 404 and nothing removed when another user owns the favourite
#[tokio::test]
async fn returns_not_found_for_other_users_favourite() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let owner = test.user().insert_mock_user(1).await?;
    let other = test.user().insert_mock_user(2).await?;
    let character_model = test.catalog().insert_character("Mace Windu").await?;
    test.favourite()
        .insert_favourite_character(owner.id, character_model.id)
        .await?;

    let result = remove_favourite(
        State(test.into_app_state()),
        CurrentUser(other),
        Path((CatalogKind::Character, character_model.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Favorite character not found" })
    );
    assert_eq!(entity::prelude::Favourite::find().count(&test.db).await?, 1);

    Ok(())
}
