//! Per-file processing: name normalization, duplicate detection,
//! classification, the check pipeline and write-back.

mod classify;
mod encoding;
mod rename;

pub use classify::{Category, classify, is_elf, is_elf_header};
pub use encoding::{Encoding, decode};
pub use rename::normalize_name;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checks::{Check, CheckEngine, SourceContext, split_lines};
use crate::duplicate::{DuplicateRegistry, compute_file_hash};
use crate::output::{Console, Status};
use crate::report::{Admission, Diagnostic, Reporter, Tally, suppression_notice};
use crate::spell::Dictionary;
use crate::{Result, SweepError};

/// File-level counters for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub checked: usize,
    pub renamed: usize,
    pub duplicates: usize,
    pub rewritten: usize,
}

/// Owns all run-wide state and processes files one at a time.
pub struct Dispatcher<W: Write> {
    console: Console<W>,
    reporter: Reporter,
    duplicates: DuplicateRegistry,
    dictionary: Box<dyn Dictionary>,
    engine: CheckEngine,
    stats: SweepStats,
}

impl<W: Write> Dispatcher<W> {
    #[must_use]
    pub fn new(console: Console<W>, reporter: Reporter, dictionary: Box<dyn Dictionary>) -> Self {
        Self {
            console,
            reporter,
            duplicates: DuplicateRegistry::new(),
            dictionary,
            engine: CheckEngine::new(),
            stats: SweepStats::default(),
        }
    }

    /// Normalizes, de-duplicates, classifies and checks one file, writing
    /// it back when a check fixed something.
    ///
    /// # Errors
    /// Returns an error if the file cannot be renamed, read or written.
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        self.stats.checked += 1;
        let path = self.normalize(path)?;
        self.detect_duplicate(&path)?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match classify(&name) {
            Category::Checks(checks) => self.run_pipeline(&path, checks),
            Category::NoChecks | Category::Skip => Ok(()),
            Category::Unknown => {
                if !is_elf(&path) {
                    self.warn(&format!("file {} has no known type -> skip", path.display()));
                }
                Ok(())
            }
        }
    }

    fn normalize(&mut self, path: &Path) -> Result<PathBuf> {
        let Some(new_name) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(normalize_name)
        else {
            return Ok(path.to_path_buf());
        };

        let target = path.with_file_name(new_name);
        if target.exists() {
            self.warn(&format!(
                "cannot move {} to {} : file exists already",
                path.display(),
                target.display()
            ));
            return Ok(path.to_path_buf());
        }

        fs::rename(path, &target).map_err(|source| SweepError::Rename {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;
        self.console.status(
            Status::Success,
            &format!("file {} moved to {}", path.display(), target.display()),
        );
        self.stats.renamed += 1;
        Ok(target)
    }

    fn detect_duplicate(&mut self, path: &Path) -> Result<()> {
        let hash = compute_file_hash(path)?;
        if self.duplicates.observe(hash) {
            self.stats.duplicates += 1;
            self.warn(&format!("file {} is a duplicate", path.display()));
        }
        Ok(())
    }

    fn run_pipeline(&mut self, path: &Path, checks: &[Check]) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| SweepError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let (content, encoding) = decode(bytes);
        if encoding == Encoding::Latin1 {
            tracing::debug!(path = %path.display(), "not valid UTF-8, checking bytes as Latin-1");
        }

        let mut lines = split_lines(&content);
        let ctx = SourceContext {
            path,
            dictionary: &*self.dictionary,
        };
        let mut changed = false;
        for &check in checks {
            let out = self.engine.run(check, checks, &ctx, &mut lines);
            tracing::debug!(
                path = %path.display(),
                ?check,
                diagnostics = out.diagnostics.len(),
                changed = out.changed,
                "check finished"
            );
            changed |= out.changed;
            emit(&mut self.reporter, &mut self.console, &out.diagnostics);
        }

        if changed {
            let write = |source| SweepError::FileWrite {
                path: path.to_path_buf(),
                source,
            };
            let bytes = encoding.encode(lines.concat()).map_err(write)?;
            fs::write(path, bytes).map_err(write)?;
            self.stats.rewritten += 1;
            self.console.status(
                Status::Success,
                &format!("fixed problem(s) in {}", path.display()),
            );
        }
        Ok(())
    }

    fn warn(&mut self, message: &str) {
        self.console.status(Status::Warning, message);
    }

    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    #[must_use]
    pub const fn stats(&self) -> SweepStats {
        self.stats
    }

    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.reporter.tally()
    }

    /// Consumes the dispatcher, returning its console.
    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

fn emit<W: Write>(reporter: &mut Reporter, console: &mut Console<W>, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match reporter.admit(diagnostic) {
            Admission::Emit => console.diagnostic(diagnostic),
            Admission::Suppress => {
                console.status(Status::Warning, &suppression_notice(diagnostic));
            }
            Admission::Silent => {}
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
