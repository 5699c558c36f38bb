//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and
//! type aliases for the database models from the `entity` crate.

pub mod app;
pub mod db;
