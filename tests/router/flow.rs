use axum::http::StatusCode;
use holocron_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use super::test_app;
use crate::util::{body_json, empty_request, json_request};

/// Expect a user to sign up, log in and manage favourites end to end
#[tokio::test]
async fn signup_login_and_manage_favourites() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let character_model = test.catalog().insert_character("Ahsoka Tano").await?;
    let app = test_app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/signup",
            json!({ "name": "Ana", "email": "a@x.com", "password": "p" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!("The user was added"));

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/signup",
            json!({ "name": "Ana", "email": "a@x.com", "password": "p" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login",
            json!({ "email": "a@x.com", "password": "p" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/user/favorites", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!({ "msg": "ok", "favourite": [] }));

    let favourite_uri = format!("/user/favorites/characters/{}", character_model.id);
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &favourite_uri,
            json!({ "url": "https://swapi.dev/api/people/1" }),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!("Favorite character added"));

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/user/favorites", Some(&token)))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["favourite"][0]["character_id"], character_model.id);
    assert_eq!(body["favourite"][0]["url"], "https://swapi.dev/api/people/1");

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &favourite_uri, Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!("Favorite character deleted"));

    let resp = app
        .oneshot(empty_request("DELETE", &favourite_uri, Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Favorite character not found" })
    );

    Ok(())
}
