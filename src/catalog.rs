//! Built-in demonstration books and the JSON catalog reader.

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    book::{Book, Price, date},
    error::{CatalogError, Result},
    list::OrderedSearchableList,
};

/// The three-book catalog used by the demonstration, in shelf order
///
/// # Errors
///
/// Returns `CatalogError::InvalidDate` if a built-in publication date is not
/// a real calendar day
pub fn seed() -> Result<OrderedSearchableList<Book>> {
    let mut books = OrderedSearchableList::with_capacity(3);
    books.push(Book::new("123", "Programming", ["alaa"], date(1988, 1, 1)?, Price::from_cents(9_999)));
    books.push(Book::new(
        "456",
        "Science of Algorithms",
        ["magdy"],
        date(2003, 9, 1)?,
        Price::from_cents(120_050),
    ));
    books.push(Book::new("789", "Python", ["esraa"], date(2019, 4, 14)?, Price::from_cents(299_999)));
    debug!(books = books.len(), "built seed catalog");
    Ok(books)
}

/// The standalone book shown by the field-helper demonstration
///
/// # Errors
///
/// Returns `CatalogError::InvalidDate` if the publication date is not a real
/// calendar day
pub fn featured() -> Result<Book> {
    Ok(Book::new(
        "8894555",
        "Programming",
        ["alaa magdy"],
        date(1968, 1, 1)?,
        Price::from_dollars_and_cents(999_999, 99)?,
    ))
}

/// Parse a JSON array of books, keeping the array order
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the text is not a JSON array of books
pub fn from_json(json: &str) -> Result<OrderedSearchableList<Book>> {
    let books: OrderedSearchableList<Book> = serde_json::from_str(json)?;
    debug!(books = books.len(), "parsed catalog");
    Ok(books)
}

/// Read a catalog file containing a JSON array of books
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read and
/// `CatalogError::Parse` if its contents are not a JSON array of books
pub fn load(path: &Path) -> Result<OrderedSearchableList<Book>> {
    debug!(path = %path.display(), "loading catalog");
    let contents = fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    from_json(&contents)
}
