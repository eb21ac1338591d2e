//! Filtering operations over a freshly scanned record set
//!
//! Every query takes the full record vector by value and returns the
//! filtered subset; nothing is mutated in place and no state survives
//! between commands. An empty result is a normal outcome, not an error.

use crate::todo::Todo;
use chrono::NaiveDate;

/// Keep records carrying at least one `!`
pub fn important(todos: Vec<Todo>) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.is_important()).collect()
}

/// Keep records authored by `name` (case-insensitive exact match)
///
/// An unauthored record never matches a non-empty requested name; a name
/// matching nothing yields an empty result set.
pub fn by_author(todos: Vec<Todo>, name: &str) -> Vec<Todo> {
    todos
        .into_iter()
        .filter(|t| t.author_matches(name))
        .collect()
}

/// Keep records dated on or after `threshold` (inclusive)
///
/// Records without a date are always excluded.
pub fn since(todos: Vec<Todo>, threshold: NaiveDate) -> Vec<Todo> {
    todos
        .into_iter()
        .filter(|t| t.date.is_some_and(|d| d >= threshold))
        .collect()
}
