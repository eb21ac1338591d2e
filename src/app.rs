//! Command dispatch and the interactive loop
//!
//! Each command is handled to completion in isolation: the source tree is
//! re-scanned, records are filtered or sorted, and the result is rendered.
//! No record state survives between commands. User-input errors (bad date
//! spec, unknown sort type, unknown command) are answered with a message
//! and never terminate the loop; only `exit` or end-of-input does.

use crate::command::Command;
use crate::files::SourceTree;
use crate::sorting::{self, SortKey};
use crate::todo::Todo;
use crate::{queries, scanner, table, validation};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Message printed once when the loop starts
pub const GREETING: &str = "Please, write your command!";

/// Message printed for input that is not a known command
pub const UNKNOWN_COMMAND: &str = "wrong command";

/// Outcome of dispatching one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Interactive query application over one source tree
pub struct App {
    tree: SourceTree,
}

impl App {
    pub fn new(tree: SourceTree) -> Self {
        Self { tree }
    }

    /// Rebuild the full record set from the source tree
    ///
    /// Called once per command; nothing is cached between calls.
    fn records(&self) -> Vec<Todo> {
        scanner::scan_files(&self.tree.load())
    }

    /// Handle one command line, writing any output to `out`
    ///
    /// Returns [`Outcome::Exit`] only for the `exit` command; every other
    /// input, including malformed arguments, leaves the loop running.
    pub fn dispatch(&self, line: &str, out: &mut impl Write) -> Result<Outcome> {
        match Command::parse(line) {
            Command::Exit => return Ok(Outcome::Exit),
            Command::Show => self.render(self.records(), out)?,
            Command::Important => self.render(queries::important(self.records()), out)?,
            Command::User(name) => self.render(queries::by_author(self.records(), &name), out)?,
            Command::Date(spec) => match validation::parse_date_spec(&spec) {
                Ok(threshold) => self.render(queries::since(self.records(), threshold), out)?,
                Err(message) => writeln!(out, "{message}")?,
            },
            Command::Sort(key) => match key.parse::<SortKey>() {
                Ok(key) => self.render(sorting::sort(self.records(), key), out)?,
                Err(message) => writeln!(out, "{message}")?,
            },
            Command::Unknown(_) => writeln!(out, "{UNKNOWN_COMMAND}")?,
        }
        Ok(Outcome::Continue)
    }

    fn render(&self, todos: Vec<Todo>, out: &mut impl Write) -> Result<()> {
        for line in table::render(&todos) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Run the blocking read-dispatch loop until `exit` or end-of-input
    pub fn run(&self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "{GREETING}")?;
        for line in input.lines() {
            let line = line?;
            if self.dispatch(&line, &mut out)? == Outcome::Exit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}
