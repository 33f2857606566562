use std::path::Path;

use super::*;
use crate::checks::test_fixtures::{ctx, findings, joined, lines};

#[test]
fn report_rule_flags_without_rewriting() {
    let rule = LineRule::report(Rule::SeveralSemicolon, ";;+");
    let mut buf = lines("a();;\nb();\nc();;;\n");
    let mut out = CheckOutput::default();

    rule.apply(&ctx(Path::new("x.c")), &mut buf, &mut out);

    assert_eq!(joined(&buf), "a();;\nb();\nc();;;\n");
    assert!(!out.changed);
    assert_eq!(
        findings(&out),
        vec![
            (Rule::SeveralSemicolon, 1, false),
            (Rule::SeveralSemicolon, 3, false),
        ]
    );
}

#[test]
fn fix_rule_replaces_every_match_and_reports_once_per_line() {
    let rule = LineRule::fix(Rule::SpaceBrace, r"(else|do)\{", "${1} {");
    let mut buf = lines("} else{ do{\nelse {\n");
    let mut out = CheckOutput::default();

    rule.apply(&ctx(Path::new("x.c")), &mut buf, &mut out);

    assert_eq!(joined(&buf), "} else { do {\nelse {\n");
    assert!(out.changed);
    assert_eq!(findings(&out), vec![(Rule::SpaceBrace, 1, true)]);
}
