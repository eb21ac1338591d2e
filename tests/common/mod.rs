//! Common test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use todo_scan::Todo;

/// Build a record from raw annotation text with a fixed source file
#[allow(dead_code)]
pub fn todo(raw: &str) -> Todo {
    Todo::from_raw(raw, Path::new("test.js"))
}

/// Build a record from raw annotation text with an explicit source file
#[allow(dead_code)]
pub fn todo_in(raw: &str, file: &str) -> Todo {
    Todo::from_raw(raw, Path::new(file))
}

/// Raw texts of a record sequence, for order assertions
#[allow(dead_code)]
pub fn raw_texts(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.raw_text.as_str()).collect()
}

/// Write a source file under the given directory, creating parents
#[allow(dead_code)]
pub fn write_source_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
