//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They enforce the rules the
//! database can't express on its own (duplicate checks, password hashing, token issuing,
//! target existence for favourites) and map models into response DTOs.

pub mod auth;
pub mod catalog;
pub mod favourite;
pub mod user;
