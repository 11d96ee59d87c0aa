use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::book::BookId;
use crate::handlers::executable::Executable;
use crate::handlers::HandlerError;
use crate::store::Store;

/// Removes the book stored under `id`. Deleting an id that is not in the catalogue is an error, so
/// repeating the request fails the second time.
///
/// `DELETE /books/{id}`
#[derive(Debug, PartialEq)]
pub struct Delete {
    pub id: BookId,
}

impl Executable for Delete {
    type Output = ();

    fn exec(self, store: Store) -> Result<(), HandlerError> {
        match store.lock().delete(self.id) {
            Some(_) => {
                info!(id = self.id, "Book deleted");
                Ok(())
            }
            None => Err(HandlerError::NotFound { id: self.id }),
        }
    }
}

pub async fn handle(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
) -> Result<StatusCode, HandlerError> {
    let Path(id) = id?;
    Delete { id }.exec(store)?;

    Ok(StatusCode::NO_CONTENT)
}
