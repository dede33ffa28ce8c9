//! Synthetic book catalogs
//!
//! Two generators produce tables with the columns
//! `Title, Author, Genre, PublishedYear, ISBN`:
//! - [`generate_books`]: independently random fields, duplicates allowed
//! - [`fixture_books`]: deterministic numbered rows for demos and tests

use chrono::Datelike;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::Table;

/// Default number of rows for random sample data
pub const DEFAULT_SAMPLE_ROWS: usize = 10_000;

/// Default number of rows for the numbered fixture
pub const DEFAULT_FIXTURE_ROWS: usize = 100;

/// How far back generated publication years may go
const YEAR_SPAN: i32 = 50;

const ISBN_DIGITS: usize = 13;

/// Column names of every generated table
pub const BOOK_COLUMNS: [&str; 5] = ["Title", "Author", "Genre", "PublishedYear", "ISBN"];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat", "aute", "irure", "voluptate", "velit", "esse", "cillum", "fugiat",
    "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "proident", "sunt",
    "culpa", "officia", "deserunt", "mollit", "anim", "laborum", "vero", "accusamus",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Beatrice", "Carlos", "Chioma", "Dmitri", "Elena", "Farah", "George",
    "Hannah", "Ingrid", "Jamal", "Keiko", "Liam", "Maria", "Nikolai", "Olivia", "Priya",
    "Quentin", "Rosa", "Samuel", "Tomas", "Ursula", "Victor", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Becker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quinn", "Rossi", "Schmidt", "Tanaka", "Usman", "Vargas", "Walsh", "Xu", "Yamamoto",
    "Zimmerman",
];

const GENRES: &[&str] = &[
    "Blues", "Classical", "Country", "Electronic", "Folk", "Funk", "Hip Hop", "Jazz", "Latin",
    "Metal", "Pop", "Reggae", "Rock", "Soul", "World", "Non Music", "Stage And Screen",
];

const FIXTURE_GENRES: [&str; 4] = ["Fiction", "Sci-Fi", "Fantasy", "Non-fiction"];

fn book_columns() -> Vec<String> {
    BOOK_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

fn random_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..3)
        .map(|_| pick(rng, LOREM_WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_author<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn random_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ISBN_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Generate `count` random books.
///
/// Years fall within the last 50 years up to `current_year`. Nothing is
/// unique: titles, authors and ISBNs may repeat.
pub fn generate_books<R: Rng + ?Sized>(rng: &mut R, count: usize, current_year: i32) -> Table {
    let rows = (0..count)
        .map(|_| {
            let year = current_year - rng.random_range(0..=YEAR_SPAN);
            vec![
                random_title(rng),
                random_author(rng),
                pick(rng, GENRES).to_string(),
                year.to_string(),
                random_isbn(rng),
            ]
        })
        .collect();

    Table::from_rows(book_columns(), rows)
}

/// Generate `count` numbered books with predictable values
pub fn fixture_books(count: usize) -> Table {
    let rows = (0..count)
        .map(|i| {
            vec![
                format!("Book Title {}", i + 1),
                format!("Author {}", i + 1),
                FIXTURE_GENRES[i % FIXTURE_GENRES.len()].to_string(),
                (2000 + i % 20).to_string(),
                format!("978-3-16-{}", 1_000_000 + i),
            ]
        })
        .collect();

    Table::from_rows(book_columns(), rows)
}
