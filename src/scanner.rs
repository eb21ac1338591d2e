//! Annotation extraction from file contents
//!
//! A line qualifies when it contains the literal marker `// TODO`; the
//! annotation payload is everything after the marker, trimmed. A line
//! containing the quoted form `'// TODO` anywhere is treated as an escaped
//! literal and skipped entirely, even if the marker also appears elsewhere
//! on that line (whole-line check, not per-occurrence).
//!
//! Line terminators: the scanner splits on `\n` and strips a trailing `\r`,
//! so both CRLF and bare-LF content are handled.

use crate::files::SourceFile;
use crate::todo::Todo;
use std::path::Path;

/// Literal token identifying a live annotation line
pub const MARKER: &str = "// TODO";

/// Quoted form of the marker; its presence disqualifies the whole line
const ESCAPED_MARKER: &str = "'// TODO";

/// Extract all annotations from one file's content, in content order
pub fn scan_content(content: &str, source_file: &Path) -> Vec<Todo> {
    content
        .lines()
        .filter(|line| !line.contains(ESCAPED_MARKER))
        .filter_map(|line| {
            line.find(MARKER)
                .map(|idx| Todo::from_raw(line[idx + MARKER.len()..].trim(), source_file))
        })
        .collect()
}

/// Extract all annotations from a set of files
///
/// Output preserves content order within each file, then input-file order.
/// Empty input (zero files, empty files) yields an empty record set.
pub fn scan_files(files: &[SourceFile]) -> Vec<Todo> {
    files
        .iter()
        .flat_map(|file| scan_content(&file.content, &file.path))
        .collect()
}
