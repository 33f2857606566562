//! Style rules for C and C++ sources and headers.

use super::{CheckOutput, LineRule, SourceContext, macro_align, operator};
use crate::report::Rule;
use crate::spell::{SpellChecker, TypoCache};

/// The C-family check: regex rules, spelling, comma and operator
/// spacing, then macro alignment, each as a pass over every line.
pub struct CodeCheck {
    leading: Vec<LineRule>,
    spelling: SpellChecker,
    braces: Vec<LineRule>,
    several_semicolon: LineRule,
}

impl Default for CodeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            leading: vec![
                LineRule::report(Rule::IndentSpace, r"( {2}|\t )"),
                LineRule::fix(
                    Rule::SpaceCond,
                    r"(^|[\t }])(if|for|while|switch)\(",
                    "${1}${2} (",
                ),
                LineRule::report(Rule::ExplicitNonZero, r"(!= *0[ )&|]|[ (&|]0 *!=)"),
                LineRule::report(Rule::ExplicitZero, r"(== *0[ )&|]|[ (&|]0 *==)"),
                LineRule::fix(
                    Rule::MallocCast,
                    r"\([^()]+\*\)(calloc|malloc|realloc)\(",
                    "${1}(",
                ),
            ],
            spelling: SpellChecker::new(),
            braces: vec![
                LineRule::fix(Rule::MissingVoid, r"([a-zA-Z0-9_]+)[ ]*\(\)[ ]*\{", "${1}(void){"),
                LineRule::fix(
                    Rule::SpaceBrace,
                    r"((struct|enum|union) [a-zA-Z0-9_]+)\{",
                    "${1} {",
                ),
                LineRule::fix(Rule::SpaceBrace, r"(else|do)\{", "${1} {"),
                LineRule::fix(Rule::SpaceBrace, r"\}while", "} while"),
            ],
            several_semicolon: LineRule::report(Rule::SeveralSemicolon, ";;+"),
        }
    }

    pub fn check(&self, ctx: &SourceContext<'_>, lines: &mut [String]) -> CheckOutput {
        let mut out = CheckOutput::default();

        for rule in &self.leading {
            rule.apply(ctx, lines, &mut out);
        }
        self.check_spelling(ctx, lines, &mut out);
        for rule in &self.braces {
            rule.apply(ctx, lines, &mut out);
        }
        check_commas(ctx, lines, &mut out);
        operator::check(ctx, lines, &mut out);
        self.several_semicolon.apply(ctx, lines, &mut out);
        macro_align::check(ctx, lines, &mut out);

        out
    }

    fn check_spelling(&self, ctx: &SourceContext<'_>, lines: &[String], out: &mut CheckOutput) {
        let mut cache = TypoCache::new();
        for (i, line) in lines.iter().enumerate() {
            for typo in self.spelling.typos(line, ctx.dictionary, &mut cache) {
                out.flagged(
                    ctx.diagnostic(Rule::Spelling, i + 1, false)
                        .with_detail(typo.detail()),
                );
            }
        }
    }
}

/// One report per comma followed by anything but a space or line feed.
fn check_commas(ctx: &SourceContext<'_>, lines: &[String], out: &mut CheckOutput) {
    for (i, line) in lines.iter().enumerate() {
        let bytes = line.as_bytes();
        for (pos, _) in line.match_indices(',') {
            if bytes.get(pos + 1).is_some_and(|&b| b != b' ' && b != b'\n') {
                out.flagged(ctx.diagnostic(Rule::SpaceComma, i + 1, false));
            }
        }
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
