//! Shared helpers for check unit tests.

use std::path::Path;

use super::{CheckOutput, SourceContext, split_lines};
use crate::report::Rule;
use crate::spell::AcceptAll;

static ACCEPT_ALL: AcceptAll = AcceptAll;

pub fn ctx(path: &Path) -> SourceContext<'_> {
    SourceContext {
        path,
        dictionary: &ACCEPT_ALL,
    }
}

pub fn lines(text: &str) -> Vec<String> {
    split_lines(text)
}

pub fn joined(lines: &[String]) -> String {
    lines.concat()
}

/// `(rule, line, auto_fix)` triples in emission order.
pub fn findings(out: &CheckOutput) -> Vec<(Rule, usize, bool)> {
    out.diagnostics
        .iter()
        .map(|d| (d.rule, d.line, d.auto_fix))
        .collect()
}

pub fn rules(out: &CheckOutput) -> Vec<Rule> {
    out.diagnostics.iter().map(|d| d.rule).collect()
}
