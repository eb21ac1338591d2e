use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One source file read whole into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// Recursive file enumerator and reader for the scanned tree
pub struct SourceTree {
    root: PathBuf,
    extension: String,
}

impl SourceTree {
    pub fn new(root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: extension.into(),
        }
    }

    /// List all files under the root with the configured extension
    ///
    /// Paths are sorted so enumeration order is deterministic across runs.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == self.extension)
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();
        paths
    }

    /// Read every listed file whole; unreadable files are skipped
    pub fn load(&self) -> Vec<SourceFile> {
        self.list_files()
            .into_iter()
            .filter_map(|path| {
                let content = fs::read_to_string(&path).ok()?;
                Some(SourceFile { path, content })
            })
            .collect()
    }
}
