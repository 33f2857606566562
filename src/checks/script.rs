use super::{CheckOutput, SourceContext};
use crate::report::Rule;

/// Reports double spaces past a line's indentation. Never rewrites.
pub fn check(ctx: &SourceContext<'_>, lines: &[String]) -> CheckOutput {
    let mut out = CheckOutput::default();
    for (i, line) in lines.iter().enumerate() {
        if line.trim_start_matches([' ', '\t']).contains("  ") {
            out.flagged(ctx.diagnostic(Rule::DoubleSpace, i + 1, false));
        }
    }
    out
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
