use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    favourite::get_favourites, util::current_user::CurrentUser,
};
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::{util::body_json, TestContextExt};

/// Expect 200 with an empty list for a user without favourites
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;

    let result = get_favourites(State(test.into_app_state()), CurrentUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "msg": "ok", "favourite": [] }));

    Ok(())
}

/// Expect only the current user's favourites, in ID order
#[tokio::test]
async fn returns_only_own_favourites() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let other_user_model = test.user().insert_mock_user(2).await?;
    let character_model = test.catalog().insert_character("Padmé Amidala").await?;
    let vehicle_model = test.catalog().insert_vehicle("Naboo royal starship").await?;
    let character_favourite = test
        .favourite()
        .insert_favourite_character(user_model.id, character_model.id)
        .await?;
    test.favourite()
        .insert_favourite_vehicle(other_user_model.id, vehicle_model.id)
        .await?;

    let result = get_favourites(State(test.into_app_state()), CurrentUser(user_model.clone())).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(
        body,
        json!({
            "msg": "ok",
            "favourite": [{
                "id": character_favourite.id,
                "user_id": user_model.id,
                "url": character_favourite.url,
                "character_id": character_model.id,
                "planet_id": null,
                "vehicle_id": null
            }]
        })
    );

    Ok(())
}
