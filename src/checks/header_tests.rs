use std::path::Path;

use super::*;
use crate::checks::test_fixtures::{ctx, findings, joined, lines};

fn run(name: &str, text: &str) -> (String, CheckOutput) {
    let path = Path::new("include").join(name);
    let buf = lines(text);
    let out = check(&ctx(&path), &buf);
    (joined(&buf), out)
}

#[test]
fn guard_name_uppercases_the_stem() {
    assert_eq!(guard_name("util.h"), "UTIL_H");
    assert_eq!(guard_name("net_io.h"), "NET_IO_H");
}

#[test]
fn well_formed_guard_passes() {
    let (_, out) = run("util.h", "#ifndef UTIL_H\n#define UTIL_H\nint f(void);\n#endif\n");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn short_header_is_reported_and_not_rewritten() {
    let text = "#pragma once\nint f(void);\n";
    let (after, out) = run("util.h", text);
    assert_eq!(after, text);
    assert!(!out.changed);
    assert_eq!(findings(&out), vec![(Rule::RecursiveInclude, 0, false)]);
}

#[test]
fn first_failing_line_is_reported() {
    let (_, wrong_ifndef) = run("util.h", "#ifndef UTIL\n#define UTIL_H\n#endif\n");
    let (_, wrong_define) = run("util.h", "#ifndef UTIL_H\n#define UTIL\n#endif\n");
    let (_, missing_endif) = run("util.h", "#ifndef UTIL_H\n#define UTIL_H\nint x;\n\n");

    assert_eq!(findings(&wrong_ifndef), vec![(Rule::RecursiveInclude, 1, false)]);
    assert_eq!(findings(&wrong_define), vec![(Rule::RecursiveInclude, 2, false)]);
    assert_eq!(findings(&missing_endif), vec![(Rule::RecursiveInclude, 4, false)]);
}
