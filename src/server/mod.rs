//! Server application core modules.
//!
//! Everything behind the Holocron HTTP API: configuration, routing, controllers, services,
//! repositories and the error types that turn failures into responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
