use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Text reported by [`fetch_title`] when there is no book
pub const TITLE_NOT_AVAILABLE: &str = "Title Not Available";
/// Text reported by [`fetch_authors`] when there is no book or no author
pub const AUTHORS_UNKNOWN: &str = "Author(s) Unknown";
/// Text reported by [`fetch_price`] when there is no book
pub const PRICE_UNAVAILABLE: &str = "Price Unavailable";

/// A non-negative amount of money, stored in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a total number of cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a price from whole dollars plus a cents component
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` if `cents` is 100 or more, or if
    /// the total does not fit in a `u64` number of cents
    pub fn from_dollars_and_cents(dollars: u64, cents: u64) -> Result<Self> {
        if cents >= 100 {
            return Err(CatalogError::InvalidPrice { dollars, cents });
        }
        dollars
            .checked_mul(100)
            .and_then(|total| total.checked_add(cents))
            .map(Self)
            .ok_or(CatalogError::InvalidPrice { dollars, cents })
    }

    /// Total number of cents
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    #[allow(clippy::arithmetic_side_effects)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}

/// Build a calendar date, rejecting days that do not exist
///
/// # Errors
///
/// Returns `CatalogError::InvalidDate` for an impossible year/month/day
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CatalogError::InvalidDate { year, month, day })
}

/// A book held by the library
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// International Standard Book Number, kept as text
    pub isbn: String,
    /// Title as printed on the cover
    pub title: String,
    /// Authors in credit order
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication date
    pub published: NaiveDate,
    /// Cover price
    pub price: Price,
}

impl Book {
    /// Create a new book
    #[must_use]
    pub fn new<S>(
        isbn: impl Into<String>,
        title: impl Into<String>,
        authors: impl IntoIterator<Item = S>,
        published: NaiveDate,
        price: Price,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            published,
            price,
        }
    }

    /// Whether `name` is one of the book's authors, compared exactly
    #[must_use]
    pub fn has_author(&self, name: &str) -> bool {
        self.authors.iter().any(|author| author == name)
    }

    /// Authors joined with `", "`
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }

    /// Long-form description used when a single book is shown on its own
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "\"{}\" (ISBN: {}) by {} - Released on {} - Cost: {}",
            self.title,
            self.isbn,
            self.authors_joined(),
            self.published.format("%B %d, %Y"),
            self.price
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Authors: {}, Publication Date: {}, Price: {}",
            self.isbn,
            self.title,
            self.authors_joined(),
            self.published,
            self.price
        )
    }
}

/// Title of `book`, or a placeholder when there is no book
#[must_use]
pub fn fetch_title(book: Option<&Book>) -> String {
    book.map_or_else(|| TITLE_NOT_AVAILABLE.to_string(), |b| b.title.clone())
}

/// Authors of `book`, or a placeholder when there is no book or it has no authors
#[must_use]
pub fn fetch_authors(book: Option<&Book>) -> String {
    match book {
        Some(b) if !b.authors.is_empty() => b.authors_joined(),
        _ => AUTHORS_UNKNOWN.to_string(),
    }
}

/// Formatted price of `book`, or a placeholder when there is no book
#[must_use]
pub fn fetch_price(book: Option<&Book>) -> String {
    book.map_or_else(|| PRICE_UNAVAILABLE.to_string(), |b| b.price.to_string())
}
