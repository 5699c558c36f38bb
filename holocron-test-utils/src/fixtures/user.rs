use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user, storing the bcrypt hash of `password`.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        let password_hash = bcrypt::hash(password, self.setup.password_hash_cost)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert `User {n}` with email `user{n}@example.com` and [`TEST_PASSWORD`].
    pub async fn insert_mock_user(&self, n: u32) -> Result<UserModel, TestError> {
        self.insert_user(
            &format!("User {}", n),
            &format!("user{}@example.com", n),
            TEST_PASSWORD,
        )
        .await
    }
}
