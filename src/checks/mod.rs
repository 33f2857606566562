//! The check catalogue.
//!
//! Every check reads the file as a sequence of lines (each keeping its
//! terminator), may rewrite lines in place, and returns the diagnostics it
//! produced together with a flag telling whether anything changed. Checks
//! are independent; the dispatcher threads the same buffer through the
//! pipeline selected for a file.

mod code;
mod header;
mod line_rule;
mod macro_align;
mod operator;
mod paren;
mod script;
#[cfg(test)]
mod test_fixtures;
mod text;

pub use code::CodeCheck;
pub use line_rule::LineRule;

use std::path::Path;

use crate::report::{Diagnostic, Rule};
use crate::spell::Dictionary;

/// One stage of a file's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Line endings, blank lines, trailing whitespace.
    Text,
    /// C-family spacing, casts, prototypes, spelling, macro alignment.
    Code,
    /// `#ifndef`/`#define`/`#endif` include guard.
    HeaderGuard,
    /// Double spaces after indentation in scripts.
    DoubleSpace,
    /// Spaces just inside parentheses.
    ParenSpacing,
}

/// What a check needs to know about the file besides its lines.
pub struct SourceContext<'a> {
    pub path: &'a Path,
    pub dictionary: &'a dyn Dictionary,
}

impl SourceContext<'_> {
    #[must_use]
    pub fn diagnostic(&self, rule: Rule, line: usize, auto_fix: bool) -> Diagnostic {
        Diagnostic::new(rule, self.path, line, auto_fix)
    }
}

#[derive(Debug, Default)]
pub struct CheckOutput {
    pub changed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutput {
    /// Records a diagnostic whose fix has been applied.
    pub fn fixed(&mut self, diagnostic: Diagnostic) {
        self.changed = true;
        self.diagnostics.push(diagnostic);
    }

    /// Records a report-only diagnostic.
    pub fn flagged(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: Self) {
        self.changed |= other.changed;
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Runs checks; holds the compiled patterns so they are built once per run.
pub struct CheckEngine {
    code: CodeCheck,
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            code: CodeCheck::new(),
        }
    }

    /// Runs `check` as one stage of `pipeline`.
    ///
    /// When the pipeline also aligns macros, parenthesis fixes that narrow a
    /// continuation line are followed by a realignment pass.
    pub fn run(
        &self,
        check: Check,
        pipeline: &[Check],
        ctx: &SourceContext<'_>,
        lines: &mut Vec<String>,
    ) -> CheckOutput {
        match check {
            Check::Text => text::check(ctx, lines),
            Check::Code => self.code.check(ctx, lines),
            Check::HeaderGuard => header::check(ctx, lines),
            Check::DoubleSpace => script::check(ctx, lines),
            Check::ParenSpacing => {
                let mut out = paren::check(ctx, lines);
                if out.changed && pipeline.contains(&Check::Code) {
                    out.merge(macro_align::realign(ctx, lines));
                }
                out
            }
        }
    }
}

/// Split `content` into lines, each keeping its `\n`; the last line may
/// lack one.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Splits a line into its body and its trailing `\n` (if any).
fn split_terminator(line: &str) -> (&str, &str) {
    line.strip_suffix('\n')
        .map_or((line, ""), |body| (body, "\n"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
