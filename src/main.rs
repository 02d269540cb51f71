use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use shelf_search::{
    Book, OrderedSearchableList, Price,
    book::{fetch_authors, fetch_price, fetch_title},
    catalog, logging,
};
use tracing::info;

/// Command-line arguments for the catalog search demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of books; the built-in catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Author whose books are listed
    #[arg(short, long, default_value = "alaa")]
    author: String,

    /// Text searched for in book titles
    #[arg(short, long, default_value = "Algorithms")]
    title: String,

    /// Price threshold in cents for the "any book over" check
    #[arg(long, default_value_t = 10_000)]
    min_price: u64,

    /// Also dump the catalog as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    show_featured_book()?;

    let books = match &args.catalog {
        Some(path) => catalog::load(path)
            .with_context(|| format!("could not load catalog from {}", path.display()))?,
        None => catalog::seed().context("could not build the built-in catalog")?,
    };
    info!(books = books.len(), "catalog ready");

    println!("\n{}", "All Books:".yellow().bold());
    books.print();

    run_queries(&books, &args);

    if args.json {
        println!("\n{}", "Catalog as JSON:".yellow().bold());
        println!("{}", serde_json::to_string_pretty(&books)?);
    }

    Ok(())
}

/// Show the standalone book through the missing-value tolerant helpers
fn show_featured_book() -> Result<()> {
    let book = catalog::featured()?;

    println!("Book Title: {}", fetch_title(Some(&book)));
    println!("Book Authors: {}", fetch_authors(Some(&book)));
    println!("Book Price: {}", fetch_price(Some(&book)));

    println!("\n{}", "Full Book Details:".yellow().bold());
    println!("{}", book.details());
    Ok(())
}

/// Run the demonstration searches against `books`
fn run_queries(books: &OrderedSearchableList<Book>, args: &Args) {
    let threshold = Price::from_cents(args.min_price);
    let exists = books.exists(|b| b.price > threshold);
    println!("\nAny book with price over {threshold}? {exists}");

    match books.find(|b| b.title.contains(args.title.as_str())) {
        Some(book) => println!("\nFound Book: {book}"),
        None => println!("\n{}", format!("No book title contains \"{}\"", args.title).red()),
    }

    let by_author = books.find_all(|b| b.has_author(&args.author));
    println!("\n{}", format!("Books by {}:", args.author).yellow().bold());
    if by_author.is_empty() {
        println!("(none)");
    }
    for book in by_author {
        println!("{book}");
    }
}
