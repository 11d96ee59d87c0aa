use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::book::{Book, BookId};
use crate::handlers::executable::Executable;
use crate::handlers::HandlerError;
use crate::store::Store;

/// Get the book stored under `id`.
///
/// `GET /books/{id}`
#[derive(Debug, PartialEq)]
pub struct Get {
    pub id: BookId,
}

impl Executable for Get {
    type Output = Book;

    fn exec(self, store: Store) -> Result<Book, HandlerError> {
        store
            .lock()
            .get(self.id)
            .ok_or(HandlerError::NotFound { id: self.id })
    }
}

pub async fn handle(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
) -> Result<Json<Book>, HandlerError> {
    let Path(id) = id?;
    Get { id }.exec(store).map(Json)
}
