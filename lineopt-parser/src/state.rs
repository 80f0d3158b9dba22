use alloc::{borrow::Cow, collections::VecDeque, vec::Vec};
use core::{iter, mem};

use crate::{ArityError, Token, Tokenizer};

/**
A [`ParseState`] is the token buffer that an option parser drives over the
course of parsing a single line. It has three zones:

- the *right* queue, holding tokens that were pushed back for re-consumption
  (like the `value` in `--option=value`);
- the *left* queue, holding tokens that were set aside as positional
  candidates while options were still being scanned;
- the lazy [`Tokenizer`] over the part of the line that hasn't been scanned.

[`pop`][ParseState::pop] always prefers the right queue. The left queue is
invisible until [`enter_argument_scan`][ParseState::enter_argument_scan] is
called, after which it comes next. The tokenizer is consulted last.

Capturing a trailer with [`pop_trailer`][ParseState::pop_trailer] freezes the
state: nothing can be popped from it afterward.
*/
#[derive(Debug, Clone)]
pub struct ParseState<'line> {
    line: &'line str,
    tokens: Tokenizer<'line>,
    left: VecDeque<Token<'line>>,
    right: VecDeque<Token<'line>>,
    scanning_arguments: bool,
}

impl<'line> ParseState<'line> {
    #[must_use]
    pub fn new(line: &'line str) -> Self {
        Self {
            line,
            tokens: Tokenizer::new(line),
            left: VecDeque::new(),
            right: VecDeque::new(),
            scanning_arguments: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn line(&self) -> &'line str {
        self.line
    }

    /// True once [`enter_argument_scan`][Self::enter_argument_scan] has been
    /// called
    #[inline]
    #[must_use]
    pub const fn is_scanning_arguments(&self) -> bool {
        self.scanning_arguments
    }

    /// True if there are no tokens left anywhere in this state, including
    /// positional candidates that aren't visible yet
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.left.is_empty() && self.right.is_empty() && self.tokens.is_finished()
    }

    /// Append tokens to the back of the left queue, as positional candidates.
    pub fn push_left(&mut self, tokens: impl IntoIterator<Item = Token<'line>>) {
        self.left.extend(tokens);
    }

    /// Put tokens back at the front of the right queue, such that the first
    /// of `tokens` is the next one popped.
    pub fn push_right(
        &mut self,
        tokens: impl IntoIterator<Item = Token<'line>, IntoIter: DoubleEndedIterator>,
    ) {
        tokens
            .into_iter()
            .rev()
            .for_each(|token| self.right.push_front(token));
    }

    /**
    Switch from option scanning to argument scanning, making the left queue
    visible to [`pop`][Self::pop].

    Anything still waiting in the right queue at this point was pushed back
    when option scanning stopped early, so it comes after every positional
    candidate that was set aside before it. It's moved behind the left queue
    so that positionals are popped in line order.
    */
    pub fn enter_argument_scan(&mut self) {
        if !self.scanning_arguments {
            self.scanning_arguments = true;
            self.left.append(&mut self.right);
        }
    }

    /// Get the next token: from the right queue, then from the left queue
    /// (only while scanning arguments), then from the line itself.
    pub fn pop(&mut self) -> Option<Token<'line>> {
        if let Some(token) = self.right.pop_front() {
            return Some(token);
        }

        if self.scanning_arguments
            && let Some(token) = self.left.pop_front()
        {
            return Some(token);
        }

        self.tokens.next()
    }

    /// Pop exactly `count` tokens, returning their text in order. Fails if
    /// the tokens run out first.
    pub fn pop_fixed(&mut self, count: usize) -> Result<Vec<Cow<'line, str>>, ArityError> {
        let mut values = Vec::with_capacity(count);

        while values.len() < count {
            match self.pop() {
                Some(token) => values.push(token.into_text()),
                None => {
                    return Err(ArityError {
                        expected: count,
                        available: values.len(),
                    });
                }
            }
        }

        Ok(values)
    }

    /// Pop every remaining token, returning their text in order.
    pub fn pop_rest(&mut self) -> Vec<Cow<'line, str>> {
        iter::from_fn(|| self.pop()).map(Token::into_text).collect()
    }

    /**
    Pop a single token and capture the rest of the line starting from it,
    verbatim. For a synthetic token (which has no place in the line), or a
    token whose offset doesn't fall on a char boundary in the line, the
    token's own text is the trailer. If there are no tokens left, the trailer
    is empty.

    This is terminal: after a trailer is captured, both queues are cleared
    and the tokenizer is exhausted, so nothing else can ever be popped.
    */
    pub fn pop_trailer(&mut self) -> Cow<'line, str> {
        let Some(token) = self.pop() else {
            return Cow::Borrowed("");
        };

        self.left.clear();
        self.right.clear();
        self.tokens.exhaust();

        match token.offset().and_then(|offset| self.line.get(offset..)) {
            Some(trailer) => Cow::Borrowed(trailer),
            None => token.into_text(),
        }
    }

    /**
    Hand everything that hasn't been consumed yet over to a fresh
    [`ParseState`] over the same line, leaving this one exhausted.

    This is how a nested command picks up exactly where its parent stopped.
    Pending tokens keep their offsets, and the unscanned part of the line
    carries over as-is, so a trailer captured by the nested parse is still a
    verbatim slice of the original line. The new state starts out scanning
    options.
    */
    #[must_use]
    pub fn continuation(&mut self) -> ParseState<'line> {
        self.enter_argument_scan();

        let mut pending = mem::take(&mut self.right);
        pending.append(&mut self.left);

        let tokens = self.tokens.clone();
        self.tokens.exhaust();

        ParseState {
            line: self.line,
            tokens,
            left: VecDeque::new(),
            right: pending,
            scanning_arguments: false,
        }
    }
}
