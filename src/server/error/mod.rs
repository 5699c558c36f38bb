//! Error types for the Holocron server.
//!
//! Domain errors (authentication, catalog, favourites, configuration) live in their own
//! modules and decide their own HTTP responses. Library errors are aggregated into
//! [`Error`] through `#[from]` and always surface as a 500.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod favourite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError, favourite::FavouriteError,
    },
};

/// Main error type for the Holocron server.
///
/// Every service and controller returns this type so `?` works across layers. The
/// `IntoResponse` implementation delegates to the domain error or falls back to a
/// generic internal server error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, access token, signup conflict).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Catalog error (duplicate name, missing entry).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favourite error (missing favourite on delete).
    #[error(transparent)]
    FavouriteError(#[from] FavouriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to sign an access token.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    /// Failed to hash or verify a password.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    TaskError(#[from] tokio::task::JoinError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Bad credentials, bad access token, email or name already taken
/// - 404 Not Found - Missing catalog entry or favourite
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavouriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a `{"msg": ...}` JSON response with the given status.
pub(crate) fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ErrorDto { msg: msg.into() })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
