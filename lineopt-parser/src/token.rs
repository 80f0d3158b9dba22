use alloc::borrow::{Cow, ToOwned};
use core::fmt;

/**
A single token from a command line.

Tokens produced by the [`Tokenizer`][crate::Tokenizer] borrow a maximal run of
non-whitespace from the line and remember the byte offset where that run
started. The offset is what lets a trailer be sliced verbatim out of the
original line, whitespace and all, instead of being glued back together from
tokens.

Tokens can also be *synthetic*: the `value` half of `--option=value`, the
tail of a short option cluster like `-ovalue`, or a reassembled set of unknown
short options. Synthetic tokens have no offset, and their text may contain
anything (including whitespace or `=`).
*/
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token<'line> {
    text: Cow<'line, str>,
    offset: Option<usize>,
}

impl<'line> Token<'line> {
    /// Create a token that was found at `offset` in the source line.
    #[inline]
    #[must_use]
    pub const fn spanned(text: &'line str, offset: usize) -> Self {
        Self {
            text: Cow::Borrowed(text),
            offset: Some(offset),
        }
    }

    /// Create a token with no position in the source line.
    #[inline]
    #[must_use]
    pub fn synthetic(text: impl Into<Cow<'line, str>>) -> Self {
        Self {
            text: text.into(),
            offset: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The byte offset of this token in the source line, if it came from
    /// there.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        self.offset.is_none()
    }

    #[inline]
    #[must_use]
    pub fn into_text(self) -> Cow<'line, str> {
        self.text
    }

    /// Sub-slice the text, borrowing from the line when the text itself
    /// borrows from the line.
    fn sub_text(&self, start: usize, end: usize) -> Cow<'line, str> {
        match self.text {
            Cow::Borrowed(text) => Cow::Borrowed(&text[start..end]),
            Cow::Owned(ref text) => Cow::Owned(text[start..end].to_owned()),
        }
    }

    /**
    Split this token at the first occurrence of `delimiter`, which must be an
    ASCII byte. The head keeps this token's offset; the tail is synthetic.
    Returns [`None`] if the delimiter doesn't appear.

    This is how `--option=value` is taken apart.
    */
    #[must_use]
    pub fn split_once(&self, delimiter: u8) -> Option<(Token<'line>, Token<'line>)> {
        debug_assert!(delimiter.is_ascii());

        let index = memchr::memchr(delimiter, self.text.as_bytes())?;
        let head = Token {
            text: self.sub_text(0, index),
            offset: self.offset,
        };
        let tail = Token::synthetic(self.sub_text(index + 1, self.text.len()));

        Some((head, tail))
    }

    /// Get a synthetic token containing everything in this token from byte
    /// index `start` onward. `start` must be on a char boundary.
    #[must_use]
    pub fn suffix(&self, start: usize) -> Token<'line> {
        Token::synthetic(self.sub_text(start, self.text.len()))
    }
}

/**
Debug-print a token. Tokens from the line print as `"text"@offset`; synthetic
tokens print as just `"text"`.
*/
impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{:?}@{offset}", self.as_str()),
            None => write!(f, "{:?}", self.as_str()),
        }
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
