use std::path::Path;

use super::*;
use crate::checks::test_fixtures::{ctx, findings, joined, lines, rules};
use crate::spell::WordList;

fn run(text: &str) -> (String, CheckOutput) {
    let check = CodeCheck::new();
    let mut buf = lines(text);
    let out = check.check(&ctx(Path::new("a.c")), &mut buf);
    (joined(&buf), out)
}

#[test]
fn inserts_space_before_condition() {
    let (text, out) = run("if(x){\n");
    assert_eq!(text, "if (x){\n");
    assert!(out.changed);
    assert_eq!(findings(&out), vec![(Rule::SpaceCond, 1, true)]);
}

#[test]
fn condition_after_brace_or_tab_is_fixed() {
    let (text, _) = run("\t}while(x);\n\tfor(;;)\n");
    assert_eq!(text, "\t} while (x);\n\tfor (;;)\n");
}

#[test]
fn identifier_ending_in_keyword_is_not_a_condition() {
    let (text, out) = run("\tmyif(x);\n");
    assert_eq!(text, "\tmyif(x);\n");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn removes_allocation_cast() {
    let (text, out) = run("\tp = (int *)malloc(10);\n");
    assert_eq!(text, "\tp = malloc(10);\n");
    assert_eq!(findings(&out), vec![(Rule::MallocCast, 1, true)]);
}

#[test]
fn space_indentation_is_reported_only() {
    let (text, out) = run("  x = 1;\n\t y = 2;\n");
    assert_eq!(text, "  x = 1;\n\t y = 2;\n");
    assert!(!out.changed);
    assert_eq!(
        findings(&out),
        vec![(Rule::IndentSpace, 1, false), (Rule::IndentSpace, 2, false)]
    );
}

#[test]
fn explicit_zero_comparisons_are_reported() {
    let (_, out) = run("if (x == 0)\nif (0 != y)\nif (x == 10)\n");
    assert_eq!(
        findings(&out),
        vec![(Rule::ExplicitNonZero, 2, false), (Rule::ExplicitZero, 1, false)]
    );
}

#[test]
fn empty_parameter_list_gets_void() {
    let (text, out) = run("int main() {\n");
    assert_eq!(text, "int main(void){\n");
    assert_eq!(findings(&out), vec![(Rule::MissingVoid, 1, true)]);
}

#[test]
fn braces_get_spaces() {
    let (text, out) = run("struct foo{\n} else{\ndo{\n}while (x);\n");
    assert_eq!(text, "struct foo {\n} else {\ndo {\n} while (x);\n");
    assert_eq!(
        findings(&out),
        vec![
            (Rule::SpaceBrace, 1, true),
            (Rule::SpaceBrace, 2, true),
            (Rule::SpaceBrace, 3, true),
            (Rule::SpaceBrace, 4, true),
        ]
    );
}

#[test]
fn each_tight_comma_is_reported() {
    let (text, out) = run("f(a,b,c);\ng(a, b,\n");
    assert_eq!(text, "f(a,b,c);\ng(a, b,\n");
    assert_eq!(
        findings(&out),
        vec![(Rule::SpaceComma, 1, false), (Rule::SpaceComma, 1, false)]
    );
}

#[test]
fn repeated_semicolons_are_reported_only() {
    let (text, out) = run("x = 1;;\n");
    assert_eq!(text, "x = 1;;\n");
    assert_eq!(rules(&out), vec![Rule::SeveralSemicolon]);
}

#[test]
fn misspelled_literal_words_are_reported_with_detail() {
    let dictionary: WordList = ["hello", "world"].into_iter().collect();
    let path = Path::new("a.c");
    let ctx = SourceContext {
        path,
        dictionary: &dictionary,
    };
    let mut buf = lines("\tputs(\"hello wrold\");\n\tputs(\"wrold\");\n");

    let out = CodeCheck::new().check(&ctx, &mut buf);

    assert_eq!(findings(&out), vec![(Rule::Spelling, 1, false)]);
    assert_eq!(
        out.diagnostics[0].detail.as_deref(),
        Some("wrold in \"hello wrold\"")
    );
}

#[test]
fn second_pass_over_fixed_code_applies_no_fix() {
    let source = "int main()\n{\n\tif(a==0){\n\t\tp = (char *)malloc(4);\n\t}else{\n\t\tdo{\n\t\t\tx++;\n\t\t}while (x);\n\t}\n\treturn 0;\n}\n";
    let (first, out) = run(source);
    assert!(out.changed);

    let (second, out) = run(&first);
    assert_eq!(first, second);
    assert!(!out.changed);
    assert!(out.diagnostics.iter().all(|d| !d.auto_fix));
}
