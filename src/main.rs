//! todo-scan - Main Entry Point
//!
//! Thin binary wrapper around the `todo_scan` library: parse the scan
//! root and extension, then hand stdin/stdout to the interactive loop.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use todo_scan::{App, SourceTree};

/// Interactive scanner and query shell for TODO comments in source trees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File extension of source files to scan
    #[arg(long, default_value = "js")]
    ext: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app = App::new(SourceTree::new(args.root, args.ext));
    let stdin = io::stdin();
    app.run(stdin.lock(), io::stdout())
}
