use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to sign up user: email {0:?} is already registered")]
    EmailTaken(String),
    #[error("Failed to sign up user: password is {0} bytes, bcrypt accepts at most 72")]
    PasswordTooLong(usize),
    #[error("Failed to log in: no user with email {0:?}")]
    UserNotFound(String),
    #[error("Failed to log in: wrong password for email {0:?}")]
    WrongPassword(String),
    #[error("Request to protected route is missing a bearer token")]
    MissingToken,
    #[error("Access token rejected: {0}")]
    InvalidToken(String),
    #[error("User with email {0:?} not found in database despite holding a valid access token")]
    TokenUserNotInDatabase(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, msg) = match self {
            Self::EmailTaken(_) => (StatusCode::UNAUTHORIZED, "There is a user with that email"),
            Self::PasswordTooLong(_) => (StatusCode::BAD_REQUEST, "Password is too long"),
            Self::UserNotFound(_) | Self::TokenUserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "User not found")
            }
            Self::WrongPassword(_) => (StatusCode::UNAUTHORIZED, "Wrong email or password"),
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing Authorization Header"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
        };

        error_response(status, msg)
    }
}
