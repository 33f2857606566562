//! Spell checking of quoted string literals.
//!
//! The word oracle is abstracted behind [`Dictionary`]; the built-in
//! jargon list covers abbreviations and register/crypto names no general
//! dictionary knows. Findings are de-duplicated per file through a
//! [`TypoCache`], case-insensitively.

mod jargon;
mod literal;

pub use jargon::is_jargon;
pub use literal::{string_literals, words};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::{Result, SweepError};

/// Default system word list consulted when none is given.
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

/// Tokens this long or longer are never checked.
const MAX_WORD_LEN: usize = 32;

/// Word-validity oracle.
pub trait Dictionary {
    /// Case-sensitive membership test.
    fn contains(&self, word: &str) -> bool;
}

/// Accepts every word; used when spell checking is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn contains(&self, _word: &str) -> bool {
        true
    }
}

/// Dictionary backed by a newline-separated word list.
///
/// A capitalized word is also accepted when its lowercase form is listed,
/// so sentence-initial words pass while lowercase proper nouns do not.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Load a word list from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SweepError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        let list: Self = content.lines().collect();
        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();
        Self { words }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let mut chars = word.chars();
        let capitalized = chars.next().is_some_and(char::is_uppercase)
            && chars.all(|c| !c.is_uppercase());
        capitalized && self.words.contains(&word.to_lowercase())
    }
}

/// Lowercase words already reported for the current file.
#[derive(Debug, Default)]
pub struct TypoCache {
    seen: HashSet<String>,
}

impl TypoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, lowercase: &str) -> bool {
        self.seen.contains(lowercase)
    }

    fn insert(&mut self, lowercase: String) {
        self.seen.insert(lowercase);
    }
}

/// A misspelled word and the (specifier-stripped) literal it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typo {
    pub word: String,
    pub literal: String,
}

impl Typo {
    #[must_use]
    pub fn detail(&self) -> String {
        format!("{} in {}", self.word, self.literal)
    }
}

pub struct SpellChecker {
    format_specifier: Regex,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            format_specifier: Regex::new(r"%[0-9]*(c|d|p|s|u|x|lld|llu|llx)")
                .expect("Invalid regex"),
        }
    }

    /// Misspelled words in the string literals of `line`, skipping any
    /// already in `cache` and recording the new ones there.
    pub fn typos(
        &self,
        line: &str,
        dictionary: &dyn Dictionary,
        cache: &mut TypoCache,
    ) -> Vec<Typo> {
        let mut typos = Vec::new();
        for literal in string_literals(line) {
            let literal = self.format_specifier.replace_all(literal, "");
            for word in words(&literal) {
                if word.len() >= MAX_WORD_LEN || dictionary.contains(word) {
                    continue;
                }
                let lowercase = word.to_ascii_lowercase();
                if is_jargon(&lowercase) || cache.contains(&lowercase) {
                    continue;
                }
                cache.insert(lowercase);
                typos.push(Typo {
                    word: word.to_string(),
                    literal: literal.to_string(),
                });
            }
        }
        typos
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
