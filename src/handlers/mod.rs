pub mod create;
pub mod delete;
pub mod executable;
pub mod get;
pub mod list;
pub mod update;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::warn;

use crate::book::BookId;
use crate::store::Store;

/// Routes of the books resource mounted at `base`, e.g. `/api/v1/books`. Every path also answers
/// with a trailing slash.
pub fn routes(base: &str) -> Router<Store> {
    let collection = || routing::get(list::handle).post(create::handle);
    let item = || {
        routing::get(get::handle)
            .put(update::handle)
            .delete(delete::handle)
    };

    Router::new()
        .route(base, collection())
        .route(&format!("{}/", base), collection())
        .route(&format!("{}/:id", base), item())
        .route(&format!("{}/:id/", base), item())
}

#[derive(Debug, ThisError)]
pub enum HandlerError {
    #[error("Book with this ID already exists")]
    Conflict { id: BookId },
    #[error("Book not found")]
    NotFound { id: BookId },
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Duplicate ids are reported as a plain client error rather than 409.
            HandlerError::Conflict { .. } => StatusCode::BAD_REQUEST,
            HandlerError::NotFound { .. } => StatusCode::NOT_FOUND,
            HandlerError::InvalidBody(rejection) => rejection.status(),
            HandlerError::InvalidPath(rejection) => rejection.status(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            HandlerError::Conflict { id } | HandlerError::NotFound { id } => {
                warn!(id, %status, "{}", self)
            }
            _ => warn!(%status, "Rejected request: {}", self),
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
