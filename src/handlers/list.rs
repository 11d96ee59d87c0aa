use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;

use crate::book::{Book, BookId};
use crate::handlers::executable::Executable;
use crate::handlers::HandlerError;
use crate::store::Store;

/// Returns the whole catalogue as a map from id to book.
///
/// `GET /books`
#[derive(Debug, PartialEq)]
pub struct List;

impl Executable for List {
    type Output = BTreeMap<BookId, Book>;

    fn exec(self, store: Store) -> Result<Self::Output, HandlerError> {
        Ok(store.lock().get_all())
    }
}

pub async fn handle(
    State(store): State<Store>,
) -> Result<Json<BTreeMap<BookId, Book>>, HandlerError> {
    List.exec(store).map(Json)
}
