use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::AuthService,
};

/// The user behind the request's bearer access token
///
/// Adding this extractor to a handler makes the route protected: requests without a
/// valid `Authorization: Bearer <token>` header are rejected before the handler runs.
pub struct CurrentUser(pub UserModel);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let user = AuthService::new(&state.db, &state.auth)
            .authenticate(token)
            .await?;

        Ok(CurrentUser(user))
    }
}

/// Reads the token out of the `Authorization` header
///
/// # Returns
/// - `Ok(&str)` - The token following the `Bearer` scheme
/// - `Err(AuthError::MissingToken)` - No `Authorization` header
/// - `Err(AuthError::InvalidToken)` - Header present but not a bearer credential
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingToken);
    };

    let header = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

    match header.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken(
            "Authorization header is not a bearer token".to_string(),
        )),
    }
}
