use axum::http::StatusCode;
use holocron::server::service::auth::token::AccessTokenClaims;
use holocron_test_utils::prelude::*;
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::EntityTrait;
use serde_json::json;
use tower::ServiceExt;

use super::test_app;
use crate::{
    util::{body_json, empty_request},
    TestContextExt,
};

/// Expect 401 Missing Authorization Header without a bearer token
#[tokio::test]
async fn rejects_missing_header() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let resp = test_app(&test)
        .oneshot(empty_request("GET", "/user/favorites", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Missing Authorization Header" })
    );

    Ok(())
}

/// Expect 401 Invalid token for a token signed with another secret
#[tokio::test]
async fn rejects_tampered_token() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let now = chrono::Utc::now().timestamp();
    let token = encode(
        &Header::default(),
        &AccessTokenClaims {
            sub: user_model.email,
            iat: now,
            exp: now + 900,
        },
        &EncodingKey::from_secret(b"not-the-server-secret"),
    )
    .unwrap();

    let resp = test_app(&test)
        .oneshot(empty_request("GET", "/user/favorites", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({ "msg": "Invalid token" }));

    Ok(())
}

/// Expect 401 Invalid token once the token has expired
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let now = chrono::Utc::now().timestamp();
    let token = encode(
        &Header::default(),
        &AccessTokenClaims {
            sub: user_model.email,
            iat: now - 3600,
            exp: now - 1800,
        },
        &EncodingKey::from_secret(test.jwt_secret.as_bytes()),
    )
    .unwrap();

    let resp = test_app(&test)
        .oneshot(empty_request("GET", "/user/favorites", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({ "msg": "Invalid token" }));

    Ok(())
}

/// Expect 401 User not found when the token's user has been removed
#[tokio::test]
async fn rejects_token_of_removed_user() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user_model = test.user().insert_mock_user(1).await?;
    let token = test.access_token(&user_model.email);
    entity::prelude::User::delete_by_id(user_model.id)
        .exec(&test.db)
        .await?;

    let resp = test_app(&test)
        .oneshot(empty_request("GET", "/user/favorites", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await, json!({ "msg": "User not found" }));

    Ok(())
}
