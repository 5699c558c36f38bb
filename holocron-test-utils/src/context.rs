//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` and the setup macros.
//! The context owns an in-memory SQLite database together with the authentication
//! settings the server would otherwise read from its environment.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::{
    constant::{TEST_JWT_SECRET, TEST_PASSWORD_HASH_COST, TEST_TOKEN_LIFETIME_SECS},
    error::TestError,
};

/// Test environment handed to each test.
///
/// # Fields
/// - `db` - Connection to a fresh in-memory SQLite database
/// - `jwt_secret` - Secret for signing and verifying access tokens
/// - `token_lifetime_secs` - Access token lifetime
/// - `password_hash_cost` - bcrypt work factor used by fixtures and services under test
pub struct TestContext {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_lifetime_secs: i64,
    pub password_hash_cost: u32,
}

impl TestContext {
    /// Create a context backed by an empty in-memory database.
    ///
    /// No tables exist yet; use [`TestContext::with_tables`], the setup macros or
    /// [`crate::TestBuilder`] to create them.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_lifetime_secs: TEST_TOKEN_LIFETIME_SECS,
            password_hash_cost: TEST_PASSWORD_HASH_COST,
        })
    }

    /// Execute the given CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// CREATE TABLE statements for the whole schema, parents before children.
    pub fn all_tables() -> Vec<TableCreateStatement> {
        let schema = Schema::new(DbBackend::Sqlite);

        vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Character),
            schema.create_table_from_entity(entity::prelude::Planet),
            schema.create_table_from_entity(entity::prelude::Vehicle),
            schema.create_table_from_entity(entity::prelude::Favourite),
        ]
    }
}
