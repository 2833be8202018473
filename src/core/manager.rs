use crate::domain::model::Book;
use crate::domain::ports::CatalogStore;

/// Entry point for callers holding primitive values. Accepts any title,
/// author and year without validation.
pub struct CatalogManager<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: i64) {
        self.store.add(Book::new(title, author, year));
    }

    pub fn remove_book(&mut self, title: &str) -> Option<Book> {
        self.store.remove_by_title(title)
    }

    /// Logs every book, or a single notice when the catalog is empty.
    pub fn show_books(&self) -> &[Book] {
        let books = self.store.list();
        if books.is_empty() {
            tracing::info!("No books in the catalog.");
        }
        for book in books {
            tracing::info!("{}", book);
        }
        books
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
