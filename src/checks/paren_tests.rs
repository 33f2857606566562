use std::path::Path;

use super::*;
use crate::checks::test_fixtures::{ctx, findings, joined, lines};

fn run(text: &str) -> (String, CheckOutput) {
    let mut buf = lines(text);
    let out = check(&ctx(Path::new("a.py")), &mut buf);
    (joined(&buf), out)
}

#[test]
fn spaces_inside_parentheses_are_removed() {
    let (text, out) = run("f( a, b )\n");
    assert_eq!(text, "f(a, b)\n");
    assert_eq!(findings(&out), vec![(Rule::SpaceParenthesis, 1, true)]);
}

#[test]
fn runs_of_spaces_and_nested_parentheses_collapse() {
    let (text, out) = run("g(   h(  x  )   )\n");
    assert_eq!(text, "g(h(x))\n");
    assert_eq!(findings(&out), vec![(Rule::SpaceParenthesis, 1, true)]);
}

#[test]
fn one_report_per_line() {
    let (_, out) = run("a( 1 )\nb(2)\nc( 3)\n");
    assert_eq!(
        findings(&out),
        vec![
            (Rule::SpaceParenthesis, 1, true),
            (Rule::SpaceParenthesis, 3, true),
        ]
    );
}

#[test]
fn leading_byte_is_never_removed() {
    let (text, _) = run("  )\n");
    assert_eq!(text, " )\n");

    let (text, out) = run(" )\n");
    assert_eq!(text, " )\n");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn empty_parentheses_are_untouched() {
    let (text, out) = run("f()\n");
    assert_eq!(text, "f()\n");
    assert!(!out.changed);
}

#[test]
fn second_pass_is_clean() {
    let (first, _) = run("x = (  1 +( 2 ) )\n   )\n");
    let (second, out) = run(&first);
    assert_eq!(first, second);
    assert!(out.diagnostics.is_empty());
}
