use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::book::{Book, BookId};
use crate::handlers::executable::Executable;
use crate::handlers::HandlerError;
use crate::store::Store;

/// Replaces every field of the book stored under `id`. There are no partial updates: the payload
/// is a full book. The path id wins over any id carried in the payload: a payload whose id differs
/// from the path is accepted and stored under, and rewritten to, the path id.
///
/// `PUT /books/{id}`
#[derive(Debug, PartialEq)]
pub struct Update {
    pub id: BookId,
    pub book: Book,
}

impl Executable for Update {
    type Output = Book;

    fn exec(self, store: Store) -> Result<Book, HandlerError> {
        let mut store = store.lock();

        if !store.exists(self.id) {
            return Err(HandlerError::NotFound { id: self.id });
        }

        let book = store.update(self.id, self.book);
        info!(id = self.id, "Book updated");

        Ok(book)
    }
}

pub async fn handle(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<Book>, HandlerError> {
    let Path(id) = id?;
    let Json(book) = payload?;

    Update { id, book }.exec(store).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Genre;

    fn silmarillion(id: BookId) -> Book {
        Book {
            id,
            title: String::from("The Silmarillion"),
            author: String::from("J.R.R. Tolkien"),
            publication_year: 1977,
            genre: Genre::Fantasy,
        }
    }

    #[test]
    fn existing_id() {
        let store = Store::seeded();

        let res = Update {
            id: 1,
            book: silmarillion(1),
        }
        .exec(store.clone())
        .unwrap();

        assert_eq!(res, silmarillion(1));
        assert_eq!(store.lock().get(1), Some(silmarillion(1)));
        assert_eq!(store.lock().size(), 3);
    }

    #[test]
    fn payload_id_is_ignored() {
        let store = Store::seeded();

        let res = Update {
            id: 2,
            book: silmarillion(77),
        }
        .exec(store.clone())
        .unwrap();

        assert_eq!(res.id, 2);
        assert_eq!(store.lock().get(2), Some(silmarillion(2)));
        assert!(!store.lock().exists(77));
    }

    #[test]
    fn missing_id() {
        let store = Store::seeded();
        let before = store.lock().get_all();

        let err = Update {
            id: 9,
            book: silmarillion(9),
        }
        .exec(store.clone())
        .unwrap_err();

        assert!(matches!(err, HandlerError::NotFound { id: 9 }));
        assert_eq!(store.lock().get_all(), before);
    }
}
