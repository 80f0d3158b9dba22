use core::iter::FusedIterator;

use crate::Token;

/**
Lazily splits a line into maximal runs of non-whitespace, where whitespace is
anything [`char::is_whitespace`] accepts. Each [`Token`] carries the byte
offset of its first character.

A tokenizer is a single pass over the line. Once it returns [`None`] it will
keep returning [`None`]; it can't be rewound.
*/
#[derive(Debug, Clone)]
pub struct Tokenizer<'line> {
    line: &'line str,

    /// Byte index of the first character that hasn't been scanned yet.
    /// Always on a char boundary.
    position: usize,
}

impl<'line> Tokenizer<'line> {
    #[inline]
    #[must_use]
    pub const fn new(line: &'line str) -> Self {
        Self { line, position: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn line(&self) -> &'line str {
        self.line
    }

    /// The byte index of the first character that hasn't been scanned yet
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The unscanned remainder of the line, including any leading whitespace
    #[inline]
    #[must_use]
    pub fn remainder(&self) -> &'line str {
        &self.line[self.position..]
    }

    /// True if no more tokens can be produced
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remainder().trim_start().is_empty()
    }

    /// Skip everything left in the line. No further tokens will be produced.
    #[inline]
    pub fn exhaust(&mut self) {
        self.position = self.line.len();
    }
}

impl<'line> Iterator for Tokenizer<'line> {
    type Item = Token<'line>;

    fn next(&mut self) -> Option<Token<'line>> {
        let remainder = self.remainder();

        let Some(skipped) = remainder.find(|c: char| !c.is_whitespace()) else {
            self.exhaust();
            return None;
        };

        let start = self.position + skipped;
        let run = &self.line[start..];
        let end = start + run.find(char::is_whitespace).unwrap_or(run.len());

        self.position = end;
        Some(Token::spanned(&self.line[start..end], start))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.line.len() - self.position;

        // Every token is at least one byte, followed by at least one byte of
        // whitespace unless it's the last token.
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for Tokenizer<'_> {}
