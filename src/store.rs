use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::book::{self, Book, BookId};

/// The Store holds every book known to the process, keyed by id. Nothing is persisted: the
/// catalogue lives exactly as long as the process does.
///
/// The store is shared between request handlers and cloned cheaply using reference counting. All
/// reads and writes go through [`InnerStore::lock`], so a handler that checks for an id and then
/// mutates the map does both under the same guard.
#[derive(Clone)]
pub struct Store {
    inner: Arc<InnerStore>,
}

impl Store {
    pub fn new() -> Store {
        let inner = Arc::new(InnerStore {
            state: Mutex::new(State {
                books: BTreeMap::new(),
            }),
        });

        Self { inner }
    }

    /// A store pre-populated with the example catalogue.
    pub fn seeded() -> Store {
        let store = Store::new();
        {
            let mut state = store.lock();
            for book in book::seed() {
                state.add(book);
            }
        }
        store
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InnerStore {
    state: Mutex<State>,
}

pub struct InnerStoreLocked<'a> {
    state: MutexGuard<'a, State>,
}

impl<'a> InnerStoreLocked<'a> {
    /// Inserts the book under its own id, replacing whatever was there. Uniqueness is checked by
    /// the caller.
    pub fn add(&mut self, book: Book) {
        self.state.books.insert(book.id, book);
    }

    pub fn get_all(&self) -> BTreeMap<BookId, Book> {
        self.state.books.clone()
    }

    pub fn get(&self, id: BookId) -> Option<Book> {
        self.state.books.get(&id).cloned()
    }

    /// Replaces the record stored under `id` and returns the stored value. The record keeps the
    /// key it is stored under, whatever id the replacement carries.
    pub fn update(&mut self, id: BookId, book: Book) -> Book {
        let book = Book { id, ..book };
        self.state.books.insert(id, book.clone());
        book
    }

    pub fn delete(&mut self, id: BookId) -> Option<Book> {
        self.state.books.remove(&id)
    }

    pub fn exists(&self, id: BookId) -> bool {
        self.state.books.contains_key(&id)
    }

    pub fn size(&self) -> usize {
        self.state.books.len()
    }
}

impl Deref for Store {
    type Target = InnerStore;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl InnerStore {
    pub fn lock(&self) -> InnerStoreLocked<'_> {
        // A panic while holding the guard cannot leave a half-written entry behind, so the map is
        // still consistent.
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        InnerStoreLocked { state }
    }
}

struct State {
    books: BTreeMap<BookId, Book>,
}
