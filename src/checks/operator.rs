//! Spacing around the comparison and boolean operators.

use super::{CheckOutput, SourceContext};
use crate::report::Rule;

/// Tried in this order at each byte offset.
const OPERATORS: [&str; 6] = ["==", "<=", ">=", "!=", "&&", "||"];

/// Byte offsets of the operators for which `needs_space(bytes, start, end)`
/// holds. A position where no operator qualifies is retried one byte later.
fn find_operators(line: &str, needs_space: impl Fn(&[u8], usize, usize) -> bool) -> Vec<usize> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    'scan: while i < bytes.len() {
        for op in OPERATORS {
            let end = i + op.len();
            if bytes[i..].starts_with(op.as_bytes()) && needs_space(bytes, i, end) {
                found.push(i);
                i = end;
                continue 'scan;
            }
        }
        i += 1;
    }
    found
}

const fn is_blank_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

fn missing_space_after(bytes: &[u8], _start: usize, end: usize) -> bool {
    bytes
        .get(end)
        .is_some_and(|&b| !is_blank_byte(b) && b != b'\n' && b != b'\r')
}

fn missing_space_before(bytes: &[u8], start: usize, _end: usize) -> bool {
    start > 0 && !is_blank_byte(bytes[start - 1])
}

/// Rebuilds `line` with a space inserted at each byte offset in `at`.
fn insert_spaces(line: &str, at: &[usize]) -> String {
    let mut result = String::with_capacity(line.len() + at.len());
    let mut last = 0;
    for &pos in at {
        result.push_str(&line[last..pos]);
        result.push(' ');
        last = pos;
    }
    result.push_str(&line[last..]);
    result
}

/// Appends a missing space after operators, then prepends a missing space
/// before them. Each pass reports a line at most once.
pub fn check(ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
    for (i, line) in lines.iter_mut().enumerate() {
        let after: Vec<usize> = find_operators(line, missing_space_after)
            .into_iter()
            .map(|start| start + 2)
            .collect();
        if !after.is_empty() {
            *line = insert_spaces(line, &after);
            out.fixed(ctx.diagnostic(Rule::SpaceOperator, i + 1, true));
        }

        let before = find_operators(line, missing_space_before);
        if !before.is_empty() {
            *line = insert_spaces(line, &before);
            out.fixed(ctx.diagnostic(Rule::SpaceOperator, i + 1, true));
        }
    }
}

#[cfg(test)]
#[path = "operator_tests.rs"]
mod tests;
