//! # Record Model
//!
//! The single entity tracked by the service and the seed set used to
//! guarantee a minimum collection size.
//!
//! - `Record`: a persisted media item with a server-generated id
//! - `RecordDraft`: validated, trimmed request fields without an id
//! - `seed_records`: deterministic placeholder collection

mod errors;
pub mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{validate, Validator};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use validator::parse_whole_number;

/// Minimum number of records a loaded collection must hold
pub const MIN_COLLECTION_SIZE: usize = 30;

/// Types cycled through by the seed set
pub const SEED_TYPES: [&str; 5] = ["Movie", "Show", "Anime", "Book", "Game"];

/// Genres cycled through by the seed set
pub const SEED_GENRES: [&str; 6] = [
    "Drama",
    "Comedy",
    "Sci-Fi",
    "Fantasy",
    "Thriller",
    "Documentary",
];

/// Statuses cycled through by the seed set
pub const SEED_STATUSES: [&str; 4] = ["Planned", "Watching", "Completed", "Dropped"];

/// A tracked media item as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub genre: String,
    pub year: i64,
    #[serde(default)]
    pub rating: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

impl Record {
    /// Create a record from a draft with a freshly generated id
    pub fn new(draft: RecordDraft) -> Self {
        Self::with_id(new_record_id(), draft)
    }

    /// Create a record from a draft with a known id
    pub fn with_id(id: impl Into<String>, draft: RecordDraft) -> Self {
        let RecordDraft {
            title,
            kind,
            genre,
            year,
            rating,
            status,
            notes,
        } = draft;

        Self {
            id: id.into(),
            title,
            kind,
            genre,
            year,
            rating,
            status,
            notes,
        }
    }

    /// Rebuild a record from one element of a stored collection.
    ///
    /// Numbers written as strings or integral floats are coerced, an
    /// unparseable rating becomes `None` and missing text fields become
    /// empty. Elements that are not objects, or that lack a string id or a
    /// whole `year`, yield `None`.
    pub fn from_stored(value: &Value) -> Option<Self> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())?;
        let year = value.get("year").and_then(parse_whole_number)?;
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            id: id.to_string(),
            title: text("title"),
            kind: text("type"),
            genre: text("genre"),
            year,
            rating: value.get("rating").and_then(parse_whole_number),
            status: text("status"),
            notes: text("notes"),
        })
    }

    /// Overwrite every field except `id` with the draft's values
    pub fn apply(&mut self, draft: RecordDraft) {
        self.title = draft.title;
        self.kind = draft.kind;
        self.genre = draft.genre;
        self.year = draft.year;
        self.rating = draft.rating;
        self.status = draft.status;
        self.notes = draft.notes;
    }
}

/// Validated request fields, ready to become (or replace) a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub title: String,
    pub kind: String,
    pub genre: String,
    pub year: i64,
    pub rating: Option<i64>,
    pub status: String,
    pub notes: String,
}

/// Generate a new opaque record id
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build the placeholder collection written when storage holds too few records.
///
/// Index `i` cycles through the type, genre and status palettes and gets
/// `year = 2000 + (i mod 20)`, no rating and empty notes.
pub fn seed_records() -> Vec<Record> {
    (0..MIN_COLLECTION_SIZE)
        .map(|i| {
            Record::new(RecordDraft {
                title: format!("Seed Title {}", i + 1),
                kind: SEED_TYPES[i % SEED_TYPES.len()].to_string(),
                genre: SEED_GENRES[i % SEED_GENRES.len()].to_string(),
                year: 2000 + (i % 20) as i64,
                rating: None,
                status: SEED_STATUSES[i % SEED_STATUSES.len()].to_string(),
                notes: String::new(),
            })
        })
        .collect()
}
