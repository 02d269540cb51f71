use std::{io::Write, path::Path};

use shelf_search::{Book, CatalogError, OrderedSearchableList, Price, catalog};

/// Helper function to load the built-in catalog for a test
fn seeded() -> OrderedSearchableList<Book> {
    catalog::seed().unwrap_or_default()
}

#[test]
fn test_seed_scenario() {
    let books = seeded();
    assert_eq!(books.len(), 3);

    assert!(books.exists(|b| b.price > Price::from_cents(10_000)));

    let found = books.find(|b| b.title.contains("Algorithms"));
    assert_eq!(found.map(|b| b.isbn.as_str()), Some("456"));

    let by_alaa = books.find_all(|b| b.has_author("alaa"));
    assert_eq!(by_alaa.len(), 1);
    assert_eq!(by_alaa.first().map(|b| b.isbn.as_str()), Some("123"));
}

#[test]
fn test_seed_index_queries() {
    let books = seeded();

    assert_eq!(books.find_index(|b| b.price > Price::from_cents(10_000)), Some(1));
    assert_eq!(books.find_last_index(|b| b.price > Price::from_cents(10_000)), Some(2));
    assert_eq!(books.find_last(|b| b.title.starts_with('P')).map(|b| b.isbn.as_str()), Some("789"));
    assert!(books.true_for_all(|b| !b.authors.is_empty()));
}

#[test]
fn test_seed_snapshot_lists_every_book() {
    let snapshot = seeded().snapshot();

    assert_eq!(
        snapshot.first().map(String::as_str),
        Some("ISBN: 123, Title: Programming, Authors: alaa, Publication Date: 1988-01-01, Price: $99.99")
    );
    assert_eq!(
        snapshot.last().map(String::as_str),
        Some("ISBN: 789, Title: Python, Authors: esraa, Publication Date: 2019-04-14, Price: $2,999.99")
    );
}

#[test]
fn test_load_bundled_catalog() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("catalog.json");
    let books = catalog::load(&path).unwrap_or_default();

    assert_eq!(books.len(), 4);
    let by_alaa: Vec<&str> =
        books.find_all(|b| b.has_author("alaa")).into_iter().map(|b| b.isbn.as_str()).collect();
    assert_eq!(by_alaa, ["123", "321"]);
    assert_eq!(books.find_last_index(|b| b.title.contains("Algorithms")), Some(3));
    assert_eq!(books.find_last_index_from(2, |b| b.title.contains("Algorithms")), Some(1));
}

#[test]
#[allow(clippy::expect_used)]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    write!(
        file,
        r#"[{{"isbn": "9", "title": "Rust", "authors": ["ferris"], "published": "2015-05-15", "price": 3900}}]"#
    )
    .expect("temp file should be writable");

    let books = catalog::load(file.path()).expect("catalog should parse");
    assert_eq!(books.find(|b| b.has_author("ferris")).map(|b| b.price), Some(Price::from_cents(3_900)));
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().ok();
    let path = dir.as_ref().map(|d| d.path().join("missing.json")).unwrap_or_default();

    let result = catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::Io { ref path, .. }) if path.ends_with("missing.json")));
}

#[test]
fn test_round_trip_through_json() {
    let books = seeded();
    let json = serde_json::to_string(&books).unwrap_or_default();
    let reloaded = catalog::from_json(&json).unwrap_or_default();

    assert_eq!(reloaded, books);
}
