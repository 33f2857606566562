//! One complete sweep: dictionary setup, path expansion, per-file
//! dispatch with recovery, and the closing summary.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::dispatch::{Dispatcher, SweepStats};
use crate::output::{ColorMode, Console, OutputFormat, Status};
use crate::report::{DEFAULT_MAX_REPORTS, Reporter, Tally};
use crate::scanner::{TreeScanner, expand_paths};
use crate::spell::{AcceptAll, DEFAULT_WORD_LIST, Dictionary, WordList};
use crate::{EXIT_FILE_ERROR, EXIT_SUCCESS, Result};

/// Everything a sweep needs, as resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub paths: Vec<PathBuf>,
    pub verbose: bool,
    pub max_reports: usize,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Explicit word list; `None` means the system default.
    pub dict: Option<PathBuf>,
    pub no_spell: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            verbose: false,
            max_reports: DEFAULT_MAX_REPORTS,
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            dict: None,
            no_spell: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: SweepStats,
    pub tally: Tally,
    /// Files that could not be renamed, read or written.
    pub failures: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.failures > 0 {
            EXIT_FILE_ERROR
        } else {
            EXIT_SUCCESS
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "checked {} file(s): {} diagnostic(s), {} fixed, {} renamed, {} duplicate(s)",
            self.stats.checked,
            self.tally.total(),
            self.tally.fixed,
            self.stats.renamed,
            self.stats.duplicates
        )
    }
}

/// Runs a sweep printing to stdout.
///
/// # Errors
/// Returns an error if an explicit word list cannot be loaded or a
/// directory cannot be scanned.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let console = Console::stdout(options.format, options.color);
    run_with_console(options, console).map(|(summary, _)| summary)
}

/// Runs a sweep printing to `console`, handing the console back.
///
/// # Errors
/// Returns an error if an explicit word list cannot be loaded or a
/// directory cannot be scanned. Failures on individual files are printed
/// and counted instead.
pub fn run_with_console<W: Write>(
    options: &RunOptions,
    mut console: Console<W>,
) -> Result<(RunSummary, Console<W>)> {
    let dictionary = load_dictionary(options, &mut console)?;
    let files = expand_paths(&TreeScanner::new(), &options.paths)?;

    let reporter = Reporter::new(options.max_reports, options.verbose);
    let mut dispatcher = Dispatcher::new(console, reporter, dictionary);
    let mut failures = 0;

    for file in &files {
        tracing::debug!(path = %file.display(), "processing");
        if let Err(err) = dispatcher.process_file(file) {
            failures += 1;
            let reason = err.chain();
            tracing::warn!(path = %file.display(), error = %reason, "file skipped");
            dispatcher.console_mut().status(
                Status::Fatal,
                &format!("cannot process {}: {reason}", file.display()),
            );
        }
    }

    let summary = RunSummary {
        stats: dispatcher.stats(),
        tally: dispatcher.tally(),
        failures,
    };
    tracing::info!(
        checked = summary.stats.checked,
        rewritten = summary.stats.rewritten,
        failures,
        "sweep finished"
    );
    let mut console = dispatcher.into_console();
    console.status(Status::Success, &summary.message());
    console.flush();
    Ok((summary, console))
}

/// Picks the word oracle: none when spelling is off, the explicit list
/// (which must load), or the system list falling back to no spelling.
fn load_dictionary<W: Write>(
    options: &RunOptions,
    console: &mut Console<W>,
) -> Result<Box<dyn Dictionary>> {
    if options.no_spell {
        return Ok(Box::new(AcceptAll));
    }
    if let Some(path) = &options.dict {
        return Ok(Box::new(WordList::load(path)?));
    }

    match WordList::load(Path::new(DEFAULT_WORD_LIST)) {
        Ok(list) => Ok(Box::new(list)),
        Err(err) => {
            tracing::debug!(error = %err.chain(), "default word list unavailable");
            console.status(
                Status::Warning,
                &format!("word list {DEFAULT_WORD_LIST} not found -> spell check disabled"),
            );
            Ok(Box::new(AcceptAll))
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
