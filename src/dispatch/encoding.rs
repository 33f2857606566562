//! Decoding of file bytes for the check pipeline.
//!
//! Files that are not valid UTF-8 are read one char per byte, so every
//! check still runs and the rewritten file keeps its original encoding.

use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// One char per byte, `U+0000..=U+00FF`.
    Latin1,
}

/// Decodes `bytes` as UTF-8, falling back to one char per byte.
#[must_use]
pub fn decode(bytes: Vec<u8>) -> (String, Encoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, Encoding::Utf8),
        Err(err) => {
            let text = err.into_bytes().into_iter().map(char::from).collect();
            (text, Encoding::Latin1)
        }
    }
}

impl Encoding {
    /// Turns `text` back into bytes in this encoding.
    ///
    /// # Errors
    /// Returns `InvalidData` if Latin-1 text holds a char above `U+00FF`.
    pub fn encode(self, text: String) -> io::Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.into_bytes()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(c).map_err(|_| {
                        io::Error::new(io::ErrorKind::InvalidData, "char outside Latin-1")
                    })
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
