use super::{CheckOutput, SourceContext, split_terminator};
use crate::report::Rule;

/// Whitespace-only lines count as blank at either end of the file.
fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n'))
}

pub fn check(ctx: &SourceContext<'_>, lines: &mut Vec<String>) -> CheckOutput {
    let mut out = CheckOutput::default();

    if lines.is_empty() {
        out.flagged(ctx.diagnostic(Rule::EmptyFile, 0, false));
        return out;
    }

    strip_carriage_returns(ctx, lines, &mut out);
    terminate_last_line(ctx, lines, &mut out);
    strip_trailing_blank_lines(ctx, lines, &mut out);

    if lines.is_empty() {
        out.flagged(ctx.diagnostic(Rule::EmptyFile, 0, false));
        return out;
    }

    strip_leading_blank_lines(ctx, lines, &mut out);
    strip_trailing_whitespace(ctx, lines, &mut out);
    out
}

fn strip_carriage_returns(ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
    for (i, line) in lines.iter_mut().enumerate() {
        if line.contains('\r') {
            line.retain(|c| c != '\r');
            out.fixed(ctx.diagnostic(Rule::WindowsCarriage, i + 1, true));
        }
    }
}

fn terminate_last_line(ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
    let count = lines.len();
    let Some(last) = lines.last_mut() else {
        return;
    };
    if !last.ends_with('\n') {
        last.push('\n');
        out.fixed(ctx.diagnostic(Rule::NewLineEof, count, true));
    }
}

fn strip_trailing_blank_lines(
    ctx: &SourceContext<'_>,
    lines: &mut Vec<String>,
    out: &mut CheckOutput,
) {
    if !lines.last().is_some_and(|l| is_blank(l)) {
        return;
    }
    out.fixed(ctx.diagnostic(Rule::EmptyLineEnd, lines.len(), true));
    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }
}

fn strip_leading_blank_lines(
    ctx: &SourceContext<'_>,
    lines: &mut Vec<String>,
    out: &mut CheckOutput,
) {
    let blank = lines.iter().take_while(|l| is_blank(l)).count();
    if blank > 0 {
        out.fixed(ctx.diagnostic(Rule::EmptyLineBegin, 1, true));
        lines.drain(..blank);
    }
}

fn strip_trailing_whitespace(ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
    for (i, line) in lines.iter_mut().enumerate() {
        let (body, terminator) = split_terminator(line);
        let trimmed = body.trim_end_matches([' ', '\t']);
        if trimmed.len() != body.len() {
            *line = format!("{trimmed}{terminator}");
            out.fixed(ctx.diagnostic(Rule::SpaceEol, i + 1, true));
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
