//! Diagnostics and output throttling.
//!
//! A [`Reporter`] decides, for each incoming [`Diagnostic`], whether it is
//! printed, replaced by a one-time suppression notice, or dropped. The
//! throttle cursor only remembers the most recent `(rule, path)` pair, so
//! interleaving two pairs restarts both counts.

mod rule;

pub use rule::Rule;

use std::path::{Path, PathBuf};

/// Diagnostics printed per `(rule, path)` pair before throttling kicks in.
pub const DEFAULT_MAX_REPORTS: usize = 10;

/// A single violation found by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: Rule,
    pub path: PathBuf,
    /// 1-based line number, 0 for file-level findings.
    pub line: usize,
    pub auto_fix: bool,
    pub detail: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(rule: Rule, path: &Path, line: usize, auto_fix: bool) -> Self {
        Self {
            rule,
            path: path.to_path_buf(),
            line,
            auto_fix,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Renders `path:line - description[ detail][ [no auto-correct]]`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = format!(
            "{}:{} - {}",
            self.path.display(),
            self.line,
            self.rule
        );
        if let Some(detail) = &self.detail {
            text.push(' ');
            text.push_str(detail);
        }
        if !self.auto_fix {
            text.push_str(" [no auto-correct]");
        }
        text
    }
}

/// What the caller should do with a diagnostic handed to [`Reporter::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Print the diagnostic.
    Emit,
    /// Print the "stop reporting" notice instead.
    Suppress,
    /// Print nothing.
    Silent,
}

/// Running totals kept for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub emitted: usize,
    pub suppressed: usize,
    pub fixed: usize,
}

impl Tally {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.emitted + self.suppressed
    }
}

#[derive(Debug)]
pub struct Reporter {
    ceiling: usize,
    verbose: bool,
    cursor: Option<(Rule, PathBuf)>,
    count: usize,
    tally: Tally,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPORTS, false)
    }
}

impl Reporter {
    #[must_use]
    pub const fn new(ceiling: usize, verbose: bool) -> Self {
        Self {
            ceiling,
            verbose,
            cursor: None,
            count: 0,
            tally: Tally {
                emitted: 0,
                suppressed: 0,
                fixed: 0,
            },
        }
    }

    /// Advances the throttle cursor for `diagnostic` and says how to render it.
    pub fn admit(&mut self, diagnostic: &Diagnostic) -> Admission {
        let same_pair = self
            .cursor
            .as_ref()
            .is_some_and(|(rule, path)| *rule == diagnostic.rule && *path == diagnostic.path);
        if !same_pair {
            self.cursor = Some((diagnostic.rule, diagnostic.path.clone()));
            self.count = 0;
        }

        if diagnostic.auto_fix {
            self.tally.fixed += 1;
        }

        let admission = if self.verbose || self.count < self.ceiling {
            self.tally.emitted += 1;
            Admission::Emit
        } else if self.count == self.ceiling {
            self.tally.suppressed += 1;
            Admission::Suppress
        } else {
            self.tally.suppressed += 1;
            Admission::Silent
        };
        self.count += 1;
        admission
    }

    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }
}

/// Notice printed once a `(rule, path)` pair crosses the ceiling.
#[must_use]
pub fn suppression_notice(diagnostic: &Diagnostic) -> String {
    format!(
        "stop reporting: '{}' for file {}",
        diagnostic.rule,
        diagnostic.path.display()
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
