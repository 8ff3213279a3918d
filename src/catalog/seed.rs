//! Built-in starter catalog

use super::book::Book;
use super::library::Library;

/// Name given to the starter library
pub const STARTER_LIBRARY_NAME: &str = "Library";

/// The books every fresh demo library starts with
pub fn starter_books() -> Vec<Book> {
    vec![
        Book::new("War and Peace", "Leo Tolstoy", 1869, "Novel", "978-5-699-12014-7"),
        Book::new("Crime and Punishment", "Fyodor Dostoevsky", 1866, "Novel", "978-5-17-090324-7"),
        Book::new("1984", "George Orwell", 1949, "Dystopia", "978-5-17-090325-4"),
        Book::new("The Master and Margarita", "Mikhail Bulgakov", 1967, "Novel", "978-5-17-090326-1"),
        Book::new("Harry Potter and the Philosopher's Stone", "J. K. Rowling", 1997, "Fantasy", "978-5-389-07435-4"),
        Book::new("The Lord of the Rings", "J. R. R. Tolkien", 1954, "Fantasy", "978-5-17-090327-8"),
        Book::new("The Little Prince", "Antoine de Saint-Exupery", 1943, "Novella", "978-5-699-12015-4"),
        Book::new("Anna Karenina", "Leo Tolstoy", 1877, "Novel", "978-5-17-090328-5"),
    ]
}

/// A library holding `starter_books()`
pub fn starter_library() -> Library {
    Library::with_books(STARTER_LIBRARY_NAME, starter_books())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_library() {
        let library = starter_library();
        assert_eq!(library.len(), 8);
        assert_eq!(library.find_by_author("Leo Tolstoy").len(), 2);
        assert_eq!(library.find_by_genre("Fantasy").len(), 2);
        assert_eq!(library.find_by_year(1869).len(), 1);
    }
}
