use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::catalog::CatalogKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("A {kind} named {name:?} already exists")]
    NameTaken { kind: CatalogKind, name: String },
    #[error("{kind} ID {id} not found")]
    NotFound { kind: CatalogKind, id: i32 },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            // Conflicts answer 401 to stay compatible with existing clients
            Self::NameTaken { kind, .. } => error_response(
                StatusCode::UNAUTHORIZED,
                format!("There is a {} with that name", kind),
            ),
            Self::NotFound { kind, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("{} not found", kind.title()))
            }
        }
    }
}
