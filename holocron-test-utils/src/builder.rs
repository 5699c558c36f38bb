//! Declarative test builder.
//!
//! `TestBuilder` collects tables and fixtures to create, then executes everything in
//! `build()` and hands back a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use holocron_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), holocron_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_all_tables()
///     .with_user("Ana", "a@x.com", "p")
///     .with_character("Luke Skywalker")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String, String)>, // (name, email, password)
    characters: Vec<String>,
    planets: Vec<String>,
    vehicles: Vec<String>,
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Create every table in the schema.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, after the full schema when
    /// [`TestBuilder::with_all_tables`] is also used.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with a bcrypt-hashed password.
    pub fn with_user(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.users
            .push((name.into(), email.into(), password.into()));
        self
    }

    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Create the configured tables, then insert fixtures in the order users,
    /// characters, planets, vehicles.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            all_tables.extend(TestContext::all_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, email, password) in self.users {
            setup.user().insert_user(&name, &email, &password).await?;
        }

        for name in self.characters {
            setup.catalog().insert_character(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        for name in self.vehicles {
            setup.catalog().insert_vehicle(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
