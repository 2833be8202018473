use crate::domain::model::Book;

/// Storage seam for the catalog. `InMemoryCatalog` is the only variant today;
/// a persistent backend would implement the same trait.
pub trait CatalogStore {
    /// Appends `book` after every existing record.
    fn add(&mut self, book: Book);

    /// Removes the first record whose title equals `title` exactly.
    /// Returns `None` and leaves the store untouched when nothing matches.
    fn remove_by_title(&mut self, title: &str) -> Option<Book>;

    /// All records in insertion order.
    fn list(&self) -> &[Book];
}
