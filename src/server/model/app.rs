use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthSettings,
}

/// Settings for password hashing and access tokens.
#[derive(Clone, Debug)]
pub struct AuthSettings {
    /// HS256 secret used to sign and verify access tokens
    pub jwt_secret: String,
    /// Seconds an access token stays valid after it is issued
    pub token_lifetime_secs: i64,
    /// bcrypt work factor for new password hashes
    pub password_hash_cost: u32,
}
