/// Canonical form of a file's basename, or `None` when it is already
/// canonical.
///
/// Rules, applied in order: `.yar` becomes `.yara`, spaces become
/// underscores, `readme.md` and `makefile` get their conventional case.
#[must_use]
pub fn normalize_name(name: &str) -> Option<String> {
    let mut normalized = name.to_string();
    if normalized.ends_with(".yar") {
        normalized.push('a');
    }
    if normalized.contains(' ') {
        normalized = normalized.replace(' ', "_");
    }
    if normalized.eq_ignore_ascii_case("readme.md") {
        normalized = "README.md".to_string();
    }
    if normalized.eq_ignore_ascii_case("makefile") {
        normalized = "Makefile".to_string();
    }

    (normalized != name).then_some(normalized)
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod tests;
