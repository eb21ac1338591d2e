//! Stable orderings over the record set
//!
//! All three sorts are total and stable: records that compare equal keep
//! their original scan order (content order within a file, then file order).

use crate::todo::Todo;
use std::cmp::Reverse;
use std::str::FromStr;

/// Sort criterion selected by the `sort <type>` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by count of `!` characters
    Importance,
    /// Grouped by author in first-seen order, unauthored records last
    User,
    /// Descending by date, undated records last
    Date,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "importance" => Ok(SortKey::Importance),
            "user" => Ok(SortKey::User),
            "date" => Ok(SortKey::Date),
            _ => Err(format!(
                "Invalid sort type '{}'. Valid options are: importance, user, date",
                s
            )),
        }
    }
}

/// Reorder records by the requested criterion
pub fn sort(todos: Vec<Todo>, key: SortKey) -> Vec<Todo> {
    match key {
        SortKey::Importance => by_importance(todos),
        SortKey::User => by_user(todos),
        SortKey::Date => by_date(todos),
    }
}

/// Descending by `!` count; ties keep scan order
pub fn by_importance(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by_key(|t| Reverse(t.importance()));
    todos
}

/// Group by case-insensitive author in order of first appearance
///
/// Bucket contents keep stable scan order; all unauthored records form a
/// single trailing bucket regardless of where they occurred during the scan.
pub fn by_user(todos: Vec<Todo>) -> Vec<Todo> {
    let mut buckets: Vec<(String, Vec<Todo>)> = Vec::new();
    let mut unauthored: Vec<Todo> = Vec::new();

    for todo in todos {
        if !todo.is_authored() {
            unauthored.push(todo);
            continue;
        }
        let key = todo.author.to_lowercase();
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(todo),
            None => buckets.push((key, vec![todo])),
        }
    }

    buckets
        .into_iter()
        .flat_map(|(_, bucket)| bucket)
        .chain(unauthored)
        .collect()
}

/// Descending by date; undated records trail all dated ones
///
/// `Reverse(Option<NaiveDate>)` orders present dates newest-first and
/// places `None` after every `Some`; stability keeps scan order for ties
/// and for the undated tail.
pub fn by_date(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by_key(|t| Reverse(t.date));
    todos
}
