//! bcrypt password hashing.
//!
//! bcrypt is CPU bound, so both operations run on the blocking thread pool instead of
//! stalling the async runtime. bcrypt only reads the first 72 bytes of its input, so the
//! non-truncating variants are used: longer passwords are refused at signup and never
//! match at login.

use bcrypt::BcryptError;

use crate::server::error::{auth::AuthError, Error};

/// Longest password bcrypt hashes in full, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes a plaintext password with the given bcrypt cost.
///
/// # Returns
/// - `Ok(String)` - bcrypt hash of the full password
/// - `Err(Error::AuthError(AuthError::PasswordTooLong))` - Password exceeds [`MAX_PASSWORD_BYTES`]
pub async fn hash_password(password: String, cost: u32) -> Result<String, Error> {
    let result =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost)).await?;

    match result {
        Ok(hash) => Ok(hash),
        Err(BcryptError::Truncation(len)) => Err(AuthError::PasswordTooLong(len).into()),
        Err(e) => Err(e.into()),
    }
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or exceeds [`MAX_PASSWORD_BYTES`]
/// - `Err(Error::PasswordHashError)` - Stored hash is malformed
pub async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    let result =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
            .await?;

    match result {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
