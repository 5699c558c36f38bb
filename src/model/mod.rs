//! Request and response bodies of the HTTP API.

pub mod api;
pub mod catalog;
pub mod favourite;
pub mod user;
