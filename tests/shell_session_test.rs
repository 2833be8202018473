use book_catalog::shell::{Flow, DEFAULT_PROMPT, REMOVE_PROMPT};
use book_catalog::{Book, CatalogManager, CatalogStore, InMemoryCatalog, Shell};
use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn run_session(script: &str) -> (Vec<Book>, String, String) {
    let logs = SharedBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let output = SharedBuffer::default();
    let shell_output = output.clone();
    let books = tracing::subscriber::with_default(subscriber, || {
        let manager = CatalogManager::new(InMemoryCatalog::new());
        let mut shell = Shell::new(Cursor::new(script.to_string()), shell_output, manager);
        shell.run().unwrap();
        shell.into_manager().into_store().list().to_vec()
    });

    (books, output.contents(), logs.contents())
}

#[test]
fn test_full_session() {
    let script = "\
add
Dune
Herbert
1965
add
Dune
Frank
1965
show
remove
Dune
show
exit
";
    let (books, output, logs) = run_session(script);

    assert_eq!(books, vec![Book::new("Dune", "Frank", 1965)]);
    assert_eq!(output.matches(DEFAULT_PROMPT).count(), 6);
    assert_eq!(output.matches(REMOVE_PROMPT).count(), 1);
    assert!(logs.contains("Book added: Title: Dune, Author: Herbert, Year: 1965"));
    assert!(logs.contains("Book with title 'Dune' removed."));
    assert_eq!(logs.matches("Title: Dune, Author: Frank, Year: 1965").count(), 3);
    assert!(logs.contains("Exiting program."));
}

#[test]
fn test_show_on_empty_catalog_logs_notice_once() {
    let (books, _, logs) = run_session("show\nexit\n");

    assert!(books.is_empty());
    assert_eq!(logs.matches("No books in the catalog.").count(), 1);
    assert!(!logs.contains("Title:"));
}

#[test]
fn test_removing_missing_title_warns() {
    let (books, _, logs) = run_session("remove\nNonexistent\nexit\n");

    assert!(books.is_empty());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("No book with title 'Nonexistent' was found to remove."));
}

#[test]
fn test_bad_year_then_recovery() {
    let (books, _, logs) = run_session("add\nEmma\nAusten\n18l5\nadd\nEmma\nAusten\n1815\nexit\n");

    assert_eq!(books, vec![Book::new("Emma", "Austen", 1815)]);
    assert_eq!(
        logs.matches("Invalid year input. Please enter a valid number.").count(),
        1
    );
}

#[test]
fn test_input_after_exit_is_ignored() {
    let (books, _, _) = run_session("exit\nadd\nDune\nHerbert\n1965\n");
    assert!(books.is_empty());
}

#[test]
fn test_step_reports_flow() {
    let manager = CatalogManager::new(InMemoryCatalog::new());
    let mut shell = Shell::new(Cursor::new("bogus\nexit\n"), Vec::new(), manager);

    assert_eq!(shell.step().unwrap(), Flow::Continue);
    assert_eq!(shell.step().unwrap(), Flow::Exit);
}

#[test]
fn test_year_beyond_32_bits_is_accepted() {
    let (books, _, logs) = run_session("add\nFar Future\nAnon\n99999999999\nexit\n");

    assert_eq!(books, vec![Book::new("Far Future", "Anon", 99_999_999_999)]);
    assert!(!logs.contains("Invalid year input"));
}
