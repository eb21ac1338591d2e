//! TODO-comment scanner and interactive query shell
//!
//! This library scans a directory tree of source files for inline `// TODO`
//! marker comments, parses each into a structured record (author, optional
//! date, message, importance), and answers line-oriented queries over the
//! record set, rendering results as an aligned text table.
//!
//! # Architecture
//!
//! - **Extraction**: `files` enumerates and reads the tree; `scanner` pulls
//!   raw annotation text out of file contents; `todo` decomposes it into
//!   structured fields.
//! - **Queries**: `queries` filters by importance, author, or date
//!   threshold; `sorting` provides the three stable orderings.
//! - **Presentation**: `table` renders records into aligned, truncated
//!   columns; `command` and `app` decode input lines and drive the
//!   read-dispatch loop.
//!
//! Records are rebuilt from the source tree on every command; no state is
//! retained between commands.
//!
//! # Example
//!
//! ```no_run
//! use todo_scan::{App, SourceTree};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let app = App::new(SourceTree::new(".", "js"));
//!     let stdin = std::io::stdin();
//!     app.run(stdin.lock(), std::io::stdout())
//! }
//! ```

pub mod app;
pub mod command;
pub mod files;
pub mod queries;
pub mod scanner;
pub mod sorting;
pub mod table;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use app::{App, Outcome};
pub use command::Command;
pub use files::{SourceFile, SourceTree};
pub use sorting::SortKey;
pub use todo::Todo;
