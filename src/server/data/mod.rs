//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They borrow any
//! `ConnectionTrait`, so callers decide whether a query runs on the pooled connection
//! or inside a transaction.

pub mod catalog;
pub mod favourite;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Whether an insert or update was rejected by a unique index
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
