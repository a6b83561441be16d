use std::iter::FusedIterator;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::delimiter::Delimiter;

// everything outside ASCII letters and digits
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z]+").unwrap());

/// Split `line` into its non-empty tokens.
///
/// The line is only borrowed: each token is a slice of it, and calling `tokenize` again on the
/// same line starts over from the beginning.
pub fn tokenize<'a>(line: &'a str, delimiter: &'a Delimiter) -> Tokens<'a> {
    Tokens { rest: line, delimiter }
}

/// Lazy iterator over the tokens of one line. Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    delimiter: &'a Delimiter,
}
impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            match self.delimiter.find(self.rest) {
                Some((at, len)) => {
                    let token = &self.rest[..at];
                    self.rest = &self.rest[at + len..];
                    if !token.is_empty() {
                        return Some(token);
                    }
                }
                None => {
                    let token = self.rest;
                    self.rest = "";
                    return Some(token);
                }
            }
        }
        None
    }
}
impl<'a> FusedIterator for Tokens<'a> {}

/// Strip every character that is not an ASCII letter or digit from `token`.
///
/// A token made up only of punctuation or whitespace becomes the empty string.
pub fn sanitize(token: &str) -> String {
    NON_ALNUM.replace_all(token, "").into_owned()
}
