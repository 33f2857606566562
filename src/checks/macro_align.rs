//! Alignment of the continuation backslashes in multi-line macros.
//!
//! A run of lines ending in `\` shares one target column, fixed by its
//! first line (rounded up to a tab stop). Narrower lines are padded with
//! tabs; wider lines are only reported.

use super::{CheckOutput, SourceContext};
use crate::report::Rule;

pub const TAB_WIDTH: usize = 4;

const CONTINUATION: &str = "\\\n";

/// Visual width of `text` with tabs expanded to the next tab stop.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    text.chars().fold(0, |width, c| {
        if c == '\t' {
            next_tab_stop(width)
        } else {
            width + 1
        }
    })
}

const fn next_tab_stop(width: usize) -> usize {
    width + TAB_WIDTH - (width % TAB_WIDTH)
}

fn insert_tab(line: &mut String) {
    let at = line.len() - CONTINUATION.len();
    line.insert(at, '\t');
}

pub fn check(ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
    let mut target = 0;

    for (i, line) in lines.iter_mut().enumerate() {
        let Some(body) = line.strip_suffix(CONTINUATION) else {
            target = 0;
            continue;
        };
        let mut width = visual_width(body);

        if target == 0 {
            if width % TAB_WIDTH == 0 {
                target = width;
            } else {
                insert_tab(line);
                target = next_tab_stop(width);
                out.fixed(ctx.diagnostic(Rule::AlignMultiLineMacro, i + 1, true));
            }
        } else if width > target {
            out.flagged(ctx.diagnostic(Rule::AlignMultiLineMacro, i + 1, false));
        } else if width < target {
            while width < target {
                insert_tab(line);
                width = next_tab_stop(width);
            }
            out.fixed(ctx.diagnostic(Rule::AlignMultiLineMacro, i + 1, true));
        }
    }
}

/// Pads continuation lines again after a later stage narrowed them. Only
/// the padding is reported; over-wide lines were flagged on the first pass.
pub fn realign(ctx: &SourceContext<'_>, lines: &mut [String]) -> CheckOutput {
    let mut pass = CheckOutput::default();
    check(ctx, lines, &mut pass);

    let mut out = CheckOutput::default();
    for diagnostic in pass.diagnostics.into_iter().filter(|d| d.auto_fix) {
        out.fixed(diagnostic);
    }
    out
}

#[cfg(test)]
#[path = "macro_align_tests.rs"]
mod tests;
