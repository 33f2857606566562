//! File classification by name.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::checks::Check;

/// How a file is handled once its name has been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Read as text and run these checks in order.
    Checks(&'static [Check]),
    /// Known type with nothing to check.
    NoChecks,
    /// Known binary or generated type; never read.
    Skip,
    /// Not in the table.
    Unknown,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Suffix(&'static str),
    Exact(&'static str),
}

impl Pattern {
    fn matches(self, name: &str) -> bool {
        match self {
            Self::Suffix(suffix) => name.ends_with(suffix),
            Self::Exact(exact) => name == exact,
        }
    }
}

const C_SOURCE: &[Check] = &[Check::Text, Check::Code, Check::ParenSpacing];
const C_HEADER: &[Check] = &[
    Check::Text,
    Check::Code,
    Check::HeaderGuard,
    Check::ParenSpacing,
];
const SCRIPT: &[Check] = &[Check::Text, Check::DoubleSpace, Check::ParenSpacing];
const TEXT: &[Check] = &[Check::Text];

const fn suffix(s: &'static str, category: Category) -> (Pattern, Category) {
    (Pattern::Suffix(s), category)
}

const fn exact(s: &'static str, category: Category) -> (Pattern, Category) {
    (Pattern::Exact(s), category)
}

/// First match wins.
const TABLE: &[(Pattern, Category)] = &[
    suffix(".a", Category::Skip),
    suffix(".asm", Category::Checks(TEXT)),
    suffix(".bin", Category::Skip),
    suffix(".c", Category::Checks(C_SOURCE)),
    suffix(".cpp", Category::Checks(C_SOURCE)),
    suffix(".dll", Category::Skip),
    suffix(".exe", Category::Skip),
    exact(".gitignore", Category::Checks(TEXT)),
    suffix(".gz", Category::Skip),
    suffix(".h", Category::Checks(C_HEADER)),
    suffix(".html", Category::Checks(TEXT)),
    suffix(".i64", Category::Skip),
    suffix(".idb", Category::Skip),
    suffix(".js", Category::Checks(TEXT)),
    suffix(".go", Category::Checks(TEXT)),
    suffix(".ko", Category::Skip),
    suffix(".log", Category::Skip),
    suffix(".md", Category::NoChecks),
    suffix(".o", Category::Skip),
    suffix(".obj", Category::Skip),
    suffix(".patch", Category::Skip),
    suffix(".pcap", Category::Skip),
    suffix(".pdf", Category::Skip),
    suffix(".pem", Category::Skip),
    suffix(".png", Category::Skip),
    suffix(".py", Category::Checks(SCRIPT)),
    suffix(".pyc", Category::Skip),
    suffix(".rb", Category::Checks(TEXT)),
    suffix(".sh", Category::Checks(TEXT)),
    suffix(".so", Category::Skip),
    suffix(".symvers", Category::Skip),
    suffix(".sys", Category::Skip),
    suffix(".tgz", Category::Skip),
    suffix(".txt", Category::Checks(TEXT)),
    suffix(".yara", Category::Checks(TEXT)),
    suffix(".xml", Category::Checks(TEXT)),
    suffix(".zip", Category::Skip),
    exact("Makefile", Category::Checks(TEXT)),
    exact("Dockerfile", Category::Checks(TEXT)),
];

/// Looks `name` (a basename) up in the classification table.
#[must_use]
pub fn classify(name: &str) -> Category {
    TABLE
        .iter()
        .find(|(pattern, _)| pattern.matches(name))
        .map_or(Category::Unknown, |&(_, category)| category)
}

const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Whether `header` (the first 16 bytes of a file) is a plausible ELF
/// identification block.
#[must_use]
pub fn is_elf_header(header: &[u8; 16]) -> bool {
    header[..4] == ELF_MAGIC
        && header[4] <= 2
        && header[5] <= 2
        && header[9..].iter().all(|&b| b == 0)
}

/// Sniffs the first 16 bytes of `path`. Short or unreadable files are not ELF.
#[must_use]
pub fn is_elf(path: &Path) -> bool {
    let mut header = [0u8; 16];
    File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .is_ok_and(|()| is_elf_header(&header))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
