use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Entry names never visited, neither as walked directories nor as
/// explicit arguments.
pub const IGNORED_NAMES: &[&str] = &[".git"];

#[must_use]
pub fn is_ignored(name: &OsStr) -> bool {
    IGNORED_NAMES.iter().any(|ignored| name == *ignored)
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return every file below it, in visit order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive walk with ignored directories pruned before descent and
/// entries sorted by file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeScanner;

impl TreeScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn scan_impl(root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_ignored(e.file_name()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| !e.path().is_dir())
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

impl FileScanner for TreeScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(Self::scan_impl(root))
    }
}

/// Expands command-line paths into the files to process: directories are
/// walked, anything else is taken as a single file unless its name is
/// ignored.
///
/// The whole list is built before any file is processed, so renames made
/// during the sweep do not disturb the walk.
///
/// # Errors
/// Returns an error if a directory cannot be scanned.
pub fn expand_paths<S: FileScanner>(scanner: &S, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else if !path.file_name().is_some_and(is_ignored) {
            files.push(path.clone());
        }
    }
    tracing::debug!(files = files.len(), "expanded paths");
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
