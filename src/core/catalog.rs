use crate::domain::model::Book;
use crate::domain::ports::CatalogStore;

/// Ordered, in-memory book collection. Lives for the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn add(&mut self, book: Book) {
        tracing::info!("Book added: {}", book);
        self.books.push(book);
    }

    fn remove_by_title(&mut self, title: &str) -> Option<Book> {
        match self.books.iter().position(|b| b.title == title) {
            Some(index) => {
                let removed = self.books.remove(index);
                tracing::info!("Book with title '{}' removed.", title);
                Some(removed)
            }
            None => {
                tracing::warn!("No book with title '{}' was found to remove.", title);
                None
            }
        }
    }

    fn list(&self) -> &[Book] {
        &self.books
    }
}
