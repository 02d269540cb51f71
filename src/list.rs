use std::{
    fmt,
    io::{self, Write},
    slice,
};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// An append-only sequence that answers predicate queries in insertion order
///
/// Elements never move once appended, so an index returned by one of the
/// `find_*index*` operations stays valid until the list is dropped. None of
/// the queries need `T: PartialEq` or `T: Ord`; every match is decided by the
/// caller's predicate.
///
/// Absence is always reported with `None`, never with a placeholder element.
///
/// # Examples
/// ```
/// use shelf_search::OrderedSearchableList;
///
/// let mut list = OrderedSearchableList::new();
/// list.push(3);
/// list.push(8);
/// list.push(5);
///
/// assert!(list.exists(|n| *n > 4));
/// assert_eq!(list.find(|n| *n > 4), Some(&8));
/// assert_eq!(list.find_last_index(|n| *n > 4), Some(2));
/// assert_eq!(list.find(|n| *n > 10), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OrderedSearchableList<T> {
    /// Elements in the order they were appended
    items: Vec<T>,
}

impl<T> Default for OrderedSearchableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedSearchableList<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty list with room for `capacity` elements
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Append an element to the end of the list
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        trace!(len = self.items.len(), "appended element");
    }

    /// Number of elements in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, or `None` if the index is out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the elements in insertion order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether any element satisfies `predicate`
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(|item| predicate(item))
    }

    /// First element (lowest index) satisfying `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|&item| predicate(item))
    }

    /// Every element satisfying `predicate`, in insertion order
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|&item| predicate(item)).collect()
    }

    /// Lowest index whose element satisfies `predicate`
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_index_from(0, predicate)
    }

    /// Lowest index `>= start` whose element satisfies `predicate`
    ///
    /// A `start` at or past the end of the list yields `None`.
    pub fn find_index_from<P>(&self, start: usize, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .find(|&(_, item)| predicate(item))
            .map(|(idx, _)| idx)
    }

    /// Last element (highest index) satisfying `predicate`
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|&item| predicate(item))
    }

    /// Highest index whose element satisfies `predicate`
    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let last = self.items.len().checked_sub(1)?;
        self.find_last_index_from(last, predicate)
    }

    /// Highest index `<= start` whose element satisfies `predicate`,
    /// scanning downward from `start`
    ///
    /// A `start` at or past the end of the list yields `None`; it is not
    /// clamped to the last index.
    pub fn find_last_index_from<P>(&self, start: usize, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.get(..=start)?.iter().rposition(|item| predicate(item))
    }

    /// Invoke `action` on every element in insertion order
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(action);
    }

    /// Whether every element satisfies `predicate`
    ///
    /// An empty list satisfies any predicate.
    pub fn true_for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(|item| predicate(item))
    }
}

impl<T: fmt::Display> OrderedSearchableList<T> {
    /// The `Display` rendering of every element, in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Write the snapshot to `out`, one element per line
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }

    /// Print the snapshot to stdout, one element per line
    pub fn print(&self) {
        for item in &self.items {
            println!("{item}");
        }
    }
}

impl<T> FromIterator<T> for OrderedSearchableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for OrderedSearchableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for OrderedSearchableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSearchableList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
