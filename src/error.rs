use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building books or reading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a valid JSON array of books
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A price was given with a cents component of 100 or more, or does not fit in cents
    #[error("invalid price: {dollars} dollars and {cents} cents")]
    InvalidPrice {
        /// Whole dollars requested
        dollars: u64,
        /// Cents requested
        cents: u64,
    },

    /// A calendar date that does not exist
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CatalogError>;
