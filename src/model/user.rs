use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user; the password hash is never serialized.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub msg: String,
    pub users: Vec<UserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
}
