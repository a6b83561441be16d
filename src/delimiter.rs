use std::fmt;

use memchr::{memchr, memchr2, memchr3};

/// The default delimiter: a comma followed by a space, both acting as separators.
pub const DEFAULT_DELIMITER: &str = ", ";

/// A set of separator characters.
///
/// Every character in the string the delimiter was built from separates tokens on its own, so
/// `", "` splits on commas *and* on spaces; runs of separators never produce empty tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct Delimiter {
    source: String,
    chars: Vec<char>,
    // separator bytes, when there are at most three and all of them are ASCII
    ascii: Option<Vec<u8>>,
}
impl Delimiter {
    /// Build a delimiter from the separator characters in `source`. Repeated characters are
    /// ignored.
    ///
    /// An empty `source` has no separators: every line becomes a single token, which reads the
    /// source as one column.
    pub fn new<S: Into<String>>(source: S) -> Delimiter {
        let source = source.into();
        let mut chars: Vec<char> = Vec::with_capacity(source.len());
        for chr in source.chars() {
            if !chars.contains(&chr) {
                chars.push(chr);
            }
        }
        let ascii = if !chars.is_empty() && chars.len() <= 3 && chars.iter().all(char::is_ascii) {
            Some(chars.iter().map(|&chr| chr as u8).collect())
        } else {
            None
        };
        Delimiter { source, chars, ascii }
    }

    /// The string this delimiter was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `chr` is one of the separator characters.
    pub fn contains(&self, chr: char) -> bool {
        self.chars.contains(&chr)
    }

    /// Find the first separator in `haystack`, returning its byte offset and its encoded length.
    pub(crate) fn find(&self, haystack: &str) -> Option<(usize, usize)> {
        let bytes = haystack.as_bytes();
        // ASCII separators never occur inside a multi-byte sequence, so any byte match is also a
        // char boundary
        match self.ascii.as_deref() {
            Some(&[a]) => memchr(a, bytes).map(|pos| (pos, 1)),
            Some(&[a, b]) => memchr2(a, b, bytes).map(|pos| (pos, 1)),
            Some(&[a, b, c]) => memchr3(a, b, c, bytes).map(|pos| (pos, 1)),
            _ => haystack.char_indices()
                .find(|&(_, chr)| self.contains(chr))
                .map(|(pos, chr)| (pos, chr.len_utf8())),
        }
    }
}
impl Default for Delimiter {
    fn default() -> Delimiter {
        Delimiter::new(DEFAULT_DELIMITER)
    }
}
impl From<&str> for Delimiter {
    fn from(source: &str) -> Delimiter {
        Delimiter::new(source)
    }
}
impl From<String> for Delimiter {
    fn from(source: String) -> Delimiter {
        Delimiter::new(source)
    }
}
impl fmt::Debug for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Delimiter").field(&self.source).finish()
    }
}
impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.source)
    }
}
