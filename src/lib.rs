//! Library book catalog built on a predicate-searchable ordered list.
//!
//! [`OrderedSearchableList`] is the generic core: an append-only sequence
//! answering `find`/`find_all`/`find_index`-style queries with caller
//! closures and reporting absence with `None`. The [`book`] and [`catalog`]
//! modules supply the library data the demonstration binary searches.

pub mod book;
pub mod catalog;
pub mod error;
pub mod list;
pub mod logging;

pub use book::{Book, Price};
pub use error::{CatalogError, Result};
pub use list::OrderedSearchableList;
