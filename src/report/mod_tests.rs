use std::path::Path;

use super::*;

fn diag(rule: Rule, path: &str) -> Diagnostic {
    Diagnostic::new(rule, Path::new(path), 3, true)
}

fn admit_many(reporter: &mut Reporter, diagnostic: &Diagnostic, times: usize) -> Vec<Admission> {
    (0..times).map(|_| reporter.admit(diagnostic)).collect()
}

#[test]
fn render_auto_fixable_has_no_marker() {
    let d = diag(Rule::SpaceEol, "src/main.c");
    assert_eq!(d.render(), "src/main.c:3 - space(s) / tab(s) at EOL");
}

#[test]
fn render_report_only_appends_marker() {
    let d = Diagnostic::new(Rule::EmptyFile, Path::new("a.txt"), 0, false);
    assert_eq!(d.render(), "a.txt:0 - empty file [no auto-correct]");
}

#[test]
fn render_includes_detail_before_marker() {
    let d = Diagnostic::new(Rule::Spelling, Path::new("x.c"), 7, false)
        .with_detail("wrold in \"hello wrold\"");
    assert_eq!(
        d.render(),
        "x.c:7 - spell check wrold in \"hello wrold\" [no auto-correct]"
    );
}

#[test]
fn eleven_reports_emit_ten_and_one_notice() {
    let mut reporter = Reporter::default();
    let d = diag(Rule::SpaceComma, "a.c");

    let admissions = admit_many(&mut reporter, &d, 11);

    let emitted = admissions.iter().filter(|a| **a == Admission::Emit).count();
    let notices = admissions
        .iter()
        .filter(|a| **a == Admission::Suppress)
        .count();
    assert_eq!(emitted, 10);
    assert_eq!(notices, 1);
    assert_eq!(admissions[10], Admission::Suppress);
}

#[test]
fn calls_after_notice_are_silent() {
    let mut reporter = Reporter::new(2, false);
    let d = diag(Rule::SpaceComma, "a.c");

    let admissions = admit_many(&mut reporter, &d, 5);

    assert_eq!(
        admissions,
        vec![
            Admission::Emit,
            Admission::Emit,
            Admission::Suppress,
            Admission::Silent,
            Admission::Silent,
        ]
    );
}

#[test]
fn verbose_never_throttles() {
    let mut reporter = Reporter::new(DEFAULT_MAX_REPORTS, true);
    let d = diag(Rule::SpaceComma, "a.c");

    let admissions = admit_many(&mut reporter, &d, 11);

    assert!(admissions.iter().all(|a| *a == Admission::Emit));
}

#[test]
fn changing_pair_resets_count() {
    let mut reporter = Reporter::new(1, false);
    let a = diag(Rule::SpaceComma, "a.c");
    let b = diag(Rule::SpaceCond, "a.c");

    assert_eq!(reporter.admit(&a), Admission::Emit);
    assert_eq!(reporter.admit(&a), Admission::Suppress);
    assert_eq!(reporter.admit(&b), Admission::Emit);
    // Only the latest pair is remembered
    assert_eq!(reporter.admit(&a), Admission::Emit);
}

#[test]
fn changing_file_resets_count() {
    let mut reporter = Reporter::new(1, false);

    assert_eq!(reporter.admit(&diag(Rule::SpaceEol, "a.c")), Admission::Emit);
    assert_eq!(reporter.admit(&diag(Rule::SpaceEol, "b.c")), Admission::Emit);
}

#[test]
fn tally_counts_emitted_suppressed_and_fixed() {
    let mut reporter = Reporter::new(1, false);
    let fixable = diag(Rule::SpaceEol, "a.c");
    let report_only = Diagnostic::new(Rule::SpaceComma, Path::new("a.c"), 1, false);

    reporter.admit(&fixable);
    reporter.admit(&fixable);
    reporter.admit(&fixable);
    reporter.admit(&report_only);

    let tally = reporter.tally();
    assert_eq!(tally.emitted, 2);
    assert_eq!(tally.suppressed, 2);
    assert_eq!(tally.fixed, 3);
    assert_eq!(tally.total(), 4);
}

#[test]
fn suppression_notice_names_rule_and_file() {
    let d = diag(Rule::SpaceOperator, "lib/x.h");
    assert_eq!(
        suppression_notice(&d),
        "stop reporting: 'no space around operator' for file lib/x.h"
    );
}
