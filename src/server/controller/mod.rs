//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for authentication, users, the catalog and favourites. Controllers
//! extract the request, call a service and wrap the result in the response envelope;
//! every handler carries a utoipa annotation for the OpenAPI document.

pub mod auth;
pub mod catalog;
pub mod favourite;
pub mod user;
pub mod util;
