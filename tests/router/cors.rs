use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use super::test_app;

/// Expect a preflight from any origin to be allowed
#[tokio::test]
async fn answers_preflight_from_any_origin() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/characters")
        .header(header::ORIGIN, "https://frontend.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let resp = test_app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    Ok(())
}

/// Expect simple requests to carry the allow-origin header too
#[tokio::test]
async fn allows_origin_on_regular_requests() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let request = Request::builder()
        .uri("/planets")
        .header(header::ORIGIN, "https://frontend.example.com")
        .body(Body::empty())
        .unwrap();

    let resp = test_app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    Ok(())
}
