use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{AccessTokenDto, LoginDto, SignupDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user
///
/// No token is issued; the user logs in afterwards.
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "User registered", body = String, example = json!("The user was added")),
        (status = 400, description = "Password longer than 72 bytes", body = ErrorDto),
        (status = 401, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Body is missing a required field"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(signup): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db, &state.auth)
        .signup(signup)
        .await?;

    Ok((StatusCode::OK, Json("The user was added")))
}

/// Exchange email and password for an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = AccessTokenDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 422, description = "Body is missing a required field"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let access_token = AuthService::new(&state.db, &state.auth)
        .login(login)
        .await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}
