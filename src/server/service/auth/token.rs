//! HS256 access tokens.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AuthSettings,
};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Email of the user the token was issued to
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs an access token for `email` valid for the configured lifetime.
pub fn issue_access_token(email: &str, settings: &AuthSettings) -> Result<String, Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = AccessTokenClaims {
        sub: email.to_string(),
        iat: now,
        exp: now + settings.token_lifetime_secs,
    };

    let key = EncodingKey::from_secret(settings.jwt_secret.as_bytes());
    let token = encode(&Header::default(), &claims, &key)?;

    Ok(token)
}

/// Verifies the signature and expiry of an access token and returns its claims.
pub fn verify_access_token(
    token: &str,
    settings: &AuthSettings,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(settings.jwt_secret.as_bytes());

    decode::<AccessTokenClaims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}
