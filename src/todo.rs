use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A `;` followed by optional whitespace and a date-shaped token.
///
/// The date is recovered from the raw text independently of segment
/// positions, so `note; 2025-03-04` carries a date even though it has
/// no author/message decomposition.
static DATE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";\s*(\d{4}-\d{2}-\d{2})").expect("valid date token regex"));

/// One extracted TODO comment with its derived fields
///
/// `author`, `date` and `message` are pure functions of `raw_text`,
/// computed once at construction and never updated independently:
/// - `author`: first `;`-delimited segment, trimmed; empty when the raw
///   text has fewer than 3 segments.
/// - `date`: first `YYYY-MM-DD` token appearing after a `;`, kept only
///   when it names a real calendar date.
/// - `message`: third `;`-delimited segment, trimmed; falls back to the
///   full raw text when fewer than 3 segments exist.
#[derive(Debug, Clone)]
pub struct Todo {
    /// Annotation payload after the marker token, trimmed
    pub raw_text: String,
    /// Author name in its original casing; empty for unauthored records
    pub author: String,
    /// Date attached to the annotation, if any
    pub date: Option<NaiveDate>,
    /// Human-readable message part of the annotation
    pub message: String,
    /// File the annotation was found in
    pub source_file: PathBuf,
}

impl Todo {
    /// Parse a raw annotation string into a structured record
    ///
    /// # Arguments
    /// * `raw` - Annotation text after the marker token (already trimmed)
    /// * `source_file` - File the annotation came from
    pub fn from_raw(raw: &str, source_file: &Path) -> Self {
        let segments: Vec<&str> = raw.split(';').collect();
        let (author, message) = if segments.len() >= 3 {
            (segments[0].trim().to_string(), segments[2].trim().to_string())
        } else {
            (String::new(), raw.to_string())
        };

        let date = DATE_TOKEN_RE
            .captures(raw)
            .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok());

        Self {
            raw_text: raw.to_string(),
            author,
            date,
            message,
            source_file: source_file.to_path_buf(),
        }
    }

    /// Count of `!` characters in the raw text
    ///
    /// Importance ordering uses the count, not mere presence: `!!!`
    /// outranks `!`.
    pub fn importance(&self) -> usize {
        self.raw_text.matches('!').count()
    }

    /// Whether the record carries at least one `!`
    pub fn is_important(&self) -> bool {
        self.importance() > 0
    }

    /// Whether the raw text decomposes into an author segment
    pub fn is_authored(&self) -> bool {
        !self.author.is_empty()
    }

    /// Case-insensitive author comparison
    ///
    /// An unauthored record never matches a non-empty requested name.
    pub fn author_matches(&self, name: &str) -> bool {
        self.author.to_lowercase() == name.to_lowercase()
    }

    /// Basename of the source file, for display
    pub fn file_name(&self) -> String {
        self.source_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
