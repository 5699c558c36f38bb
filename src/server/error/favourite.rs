use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::catalog::CatalogKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum FavouriteError {
    #[error("User ID {user_id} has no favourite {kind} with ID {target_id}")]
    NotFound {
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
    },
}

impl IntoResponse for FavouriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { kind, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("Favorite {} not found", kind))
            }
        }
    }
}
