use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::user::get_users;
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::{util::body_json, TestContextExt};

/// Expect 200 with every user and no password hashes
#[tokio::test]
async fn returns_users_without_passwords() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "msg": "ok",
            "users": [{ "id": user_model.id, "name": "User 1", "email": "user1@example.com" }]
        })
    );

    Ok(())
}

/// Expect 500 internal server error when required database tables dont exist
#[tokio::test]
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
