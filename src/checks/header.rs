use super::{CheckOutput, SourceContext};
use crate::report::Rule;

/// Guard macro expected for a header: `foo.h` guards with `FOO_H`.
#[must_use]
pub fn guard_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".h").unwrap_or(file_name);
    format!("{}_H", stem.to_uppercase())
}

/// Verifies the `#ifndef`/`#define`/`#endif` include guard. Never rewrites.
pub fn check(ctx: &SourceContext<'_>, lines: &[String]) -> CheckOutput {
    let mut out = CheckOutput::default();

    if lines.len() < 3 {
        out.flagged(ctx.diagnostic(Rule::RecursiveInclude, 0, false));
        return out;
    }

    let file_name = ctx
        .path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let guard = guard_name(&file_name);

    let failing = if lines[0] != format!("#ifndef {guard}\n") {
        Some(1)
    } else if lines[1] != format!("#define {guard}\n") {
        Some(2)
    } else if lines[lines.len() - 1] != "#endif\n" {
        Some(lines.len())
    } else {
        None
    };

    if let Some(line) = failing {
        out.flagged(ctx.diagnostic(Rule::RecursiveInclude, line, false));
    }
    out
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
