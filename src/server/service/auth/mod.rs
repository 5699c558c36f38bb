//! Authentication service layer.
//!
//! Handles signup, login and resolving the user behind an access token. Passwords are
//! stored as bcrypt hashes and access tokens are HS256 JWTs whose subject is the user's
//! email.

pub mod password;
pub mod token;


use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, SignupDto},
    server::{
        data::{is_unique_violation, user::UserRepository},
        error::{auth::AuthError, Error},
        model::{app::AuthSettings, db::UserModel},
        service::auth::{
            password::{hash_password, verify_password},
            token::{issue_access_token, verify_access_token},
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, settings: &'a AuthSettings) -> Self {
        Self { db, settings }
    }

    /// Registers a new user with a hashed password
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - Email is already registered
    /// - `Err(Error::AuthError(AuthError::PasswordTooLong))` - Password exceeds 72 bytes
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn signup(&self, signup: SignupDto) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&signup.email).await?.is_some() {
            return Err(AuthError::EmailTaken(signup.email).into());
        }

        let password_hash =
            hash_password(signup.password, self.settings.password_hash_cost).await?;

        // The unique index still rejects a concurrent signup that passed the check above
        let user = match user_repo
            .create(signup.name, signup.email.clone(), password_hash)
            .await
        {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => {
                return Err(AuthError::EmailTaken(signup.email).into())
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Registered user ID {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks a user's credentials and issues an access token
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user with that email
    /// - `Err(Error::AuthError(AuthError::WrongPassword))` - Password does not match
    pub async fn login(&self, login: LoginDto) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&login.email).await? else {
            return Err(AuthError::UserNotFound(login.email).into());
        };

        if !verify_password(login.password, user.password).await? {
            return Err(AuthError::WrongPassword(user.email).into());
        }

        issue_access_token(&user.email, self.settings)
    }

    /// Resolves the user an access token was issued to
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Token is valid and its user still exists
    /// - `Err(Error::AuthError(AuthError::InvalidToken))` - Bad signature, malformed or expired
    /// - `Err(Error::AuthError(AuthError::TokenUserNotInDatabase))` - Token user no longer exists
    pub async fn authenticate(&self, token: &str) -> Result<UserModel, Error> {
        let claims = verify_access_token(token, self.settings)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&claims.sub).await? else {
            return Err(AuthError::TokenUserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }
}
