//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
};
use holocron::server::{
    model::app::{AppState, AuthSettings},
    service::auth::token::issue_access_token,
};
use holocron_test_utils::TestContext;
use serde_json::Value;

/// Extension trait for TestContext to create the server's state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Signs a valid access token for `email` with the context's secret
    fn access_token(&self, email: &str) -> String;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            auth: AuthSettings {
                jwt_secret: self.jwt_secret.clone(),
                token_lifetime_secs: self.token_lifetime_secs,
                password_hash_cost: self.password_hash_cost,
            },
        }
    }

    fn access_token(&self, email: &str) -> String {
        issue_access_token(email, &self.into_app_state().auth).unwrap()
    }
}

/// Reads a response body as JSON
pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Builds a JSON request, optionally carrying a bearer token
pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Builds a request without a body, optionally carrying a bearer token
pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}
