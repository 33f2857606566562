use regex::Regex;

use super::{CheckOutput, SourceContext};
use crate::report::Rule;

/// A stateless per-line rule: a pattern and, for auto-fixing rules, the
/// replacement applied to every match.
#[derive(Debug)]
pub struct LineRule {
    rule: Rule,
    pattern: Regex,
    replacement: Option<&'static str>,
}

impl LineRule {
    /// Rule that only reports matching lines.
    #[must_use]
    pub fn report(rule: Rule, pattern: &str) -> Self {
        Self {
            rule,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            replacement: None,
        }
    }

    /// Rule that rewrites every match with `replacement`.
    #[must_use]
    pub fn fix(rule: Rule, pattern: &str, replacement: &'static str) -> Self {
        Self {
            rule,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            replacement: Some(replacement),
        }
    }

    /// Applies the rule to every line, one diagnostic per matching line.
    pub fn apply(&self, ctx: &SourceContext<'_>, lines: &mut [String], out: &mut CheckOutput) {
        for (i, line) in lines.iter_mut().enumerate() {
            if !self.pattern.is_match(line) {
                continue;
            }
            let diagnostic = ctx.diagnostic(self.rule, i + 1, self.replacement.is_some());
            match self.replacement {
                Some(replacement) => {
                    let fixed = self.pattern.replace_all(line, replacement).into_owned();
                    *line = fixed;
                    out.fixed(diagnostic);
                }
                None => out.flagged(diagnostic),
            }
        }
    }
}

#[cfg(test)]
#[path = "line_rule_tests.rs"]
mod tests;
