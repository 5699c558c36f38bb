use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{model::user::LoginDto, server::controller::auth::login};
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::{util::body_json, TestContextExt};

fn login_dto(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect 200 with a non-empty access token for valid credentials
#[tokio::test]
async fn returns_access_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_user("Ana", "a@x.com", "p")
        .build()
        .await?;

    let result = login(State(test.into_app_state()), Json(login_dto("a@x.com", "p"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expect 401 User not found for an unknown email
#[tokio::test]
async fn returns_unauthorized_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = login(State(test.into_app_state()), Json(login_dto("a@x.com", "p"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({ "msg": "User not found" }));

    Ok(())
}

/// Expect 401 Wrong email or password for a wrong password
#[tokio::test]
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let result = login(
        State(test.into_app_state()),
        Json(login_dto(&user_model.email, "wrong")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Wrong email or password" })
    );

    Ok(())
}
