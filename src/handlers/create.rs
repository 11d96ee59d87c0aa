use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::book::Book;
use crate::handlers::executable::Executable;
use crate::handlers::HandlerError;
use crate::store::Store;

/// Adds a book under the id the client supplied. If a book with that id already exists the request
/// fails with a conflict and the stored record is left as it was.
///
/// `POST /books`
#[derive(Debug, PartialEq)]
pub struct Create {
    pub book: Book,
}

impl Executable for Create {
    type Output = Book;

    fn exec(self, store: Store) -> Result<Book, HandlerError> {
        let mut store = store.lock();

        if store.exists(self.book.id) {
            return Err(HandlerError::Conflict { id: self.book.id });
        }

        store.add(self.book.clone());
        info!(id = self.book.id, "Book created");

        Ok(self.book)
    }
}

pub async fn handle(
    State(store): State<Store>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), HandlerError> {
    let Json(book) = payload?;
    let book = Create { book }.exec(store)?;

    Ok((StatusCode::CREATED, Json(book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Genre;

    fn dune(id: i64) -> Book {
        Book {
            id,
            title: String::from("Dune"),
            author: String::from("Frank Herbert"),
            publication_year: 1965,
            genre: Genre::SciFi,
        }
    }

    #[test]
    fn new_id() {
        let store = Store::seeded();

        let res = Create { book: dune(4) }.exec(store.clone()).unwrap();

        assert_eq!(res, dune(4));
        assert_eq!(store.lock().get(4), Some(dune(4)));
        assert_eq!(store.lock().size(), 4);
    }

    #[test]
    fn existing_id() {
        let store = Store::seeded();
        let before = store.lock().get_all();

        let err = Create { book: dune(1) }.exec(store.clone()).unwrap_err();

        assert!(matches!(err, HandlerError::Conflict { id: 1 }));
        assert_eq!(store.lock().get_all(), before);
    }

    #[test]
    fn negative_and_zero_ids_are_accepted() {
        let store = Store::new();

        Create { book: dune(0) }.exec(store.clone()).unwrap();
        Create { book: dune(-5) }.exec(store.clone()).unwrap();

        assert_eq!(store.lock().size(), 2);
    }
}
