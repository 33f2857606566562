use super::{CheckOutput, SourceContext};
use crate::report::Rule;

/// Drops every run of spaces right after a `(`.
fn collapse_after_open(line: &mut String) -> bool {
    let mut changed = false;
    while let Some(idx) = line.find("( ") {
        let start = idx + 1;
        let run = line[start..].bytes().take_while(|&b| b == b' ').count();
        line.replace_range(start..start + run, "");
        changed = true;
    }
    changed
}

/// Drops every run of spaces right before a `)`. The search starts at
/// byte 1 and byte 0 is never removed.
fn collapse_before_close(line: &mut String) -> bool {
    let mut changed = false;
    while let Some(idx) = find_space_close(line.as_bytes()) {
        let bytes = line.as_bytes();
        let mut start = idx;
        while start > 1 && bytes[start - 1] == b' ' {
            start -= 1;
        }
        line.replace_range(start..=idx, "");
        changed = true;
    }
    changed
}

fn find_space_close(bytes: &[u8]) -> Option<usize> {
    bytes
        .get(1..)?
        .windows(2)
        .position(|pair| pair == b" )")
        .map(|pos| pos + 1)
}

/// Removes spaces just inside parentheses, one report per changed line.
pub fn check(ctx: &SourceContext<'_>, lines: &mut [String]) -> CheckOutput {
    let mut out = CheckOutput::default();
    for (i, line) in lines.iter_mut().enumerate() {
        let opened = collapse_after_open(line);
        let closed = collapse_before_close(line);
        if opened || closed {
            out.fixed(ctx.diagnostic(Rule::SpaceParenthesis, i + 1, true));
        }
    }
    out
}

#[cfg(test)]
#[path = "paren_tests.rs"]
mod tests;
