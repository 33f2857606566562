//! Byte-level scanners for quoted literals and word tokens.
//!
//! Both scanners only ever split at ASCII bytes, so every returned slice
//! is valid UTF-8 even when the line contains multi-byte characters.

const INCLUDE_PREFIX: &[u8] = b"include ";

/// Double-quoted literals in `line`, quotes included.
///
/// A quote directly preceded by `include ` never opens a literal; scanning
/// then resumes at the following byte, so the closing quote of an include
/// path may still open a literal of its own.
#[must_use]
pub fn string_literals(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut literals = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] != b'"' || bytes[..pos].ends_with(INCLUDE_PREFIX) {
            pos += 1;
            continue;
        }
        let Some(len) = bytes[pos + 1..].iter().position(|&b| b == b'"') else {
            break;
        };
        let end = pos + len + 2;
        literals.push(&line[pos..end]);
        pos = end;
    }
    literals
}

/// Word tokens: an ASCII letter followed by ASCII lowercase letters, never
/// starting right after a `%`.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let starts_word = bytes[pos].is_ascii_alphabetic() && (pos == 0 || bytes[pos - 1] != b'%');
        if !starts_word {
            pos += 1;
            continue;
        }
        let tail = bytes[pos + 1..]
            .iter()
            .take_while(|b| b.is_ascii_lowercase())
            .count();
        let end = pos + 1 + tail;
        found.push(&text[pos..end]);
        pos = end;
    }
    found
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
