/*!
Declarations of the options and positional arguments a command accepts.

A [`Schema`] is plain data; it's checked for mistakes (like two options
claiming the same spelling) when it's handed to
[`OptionParser::new`][crate::OptionParser::new], not while parsing.
*/

use std::num::NonZeroUsize;

/// What an option does when it appears on the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// The option takes no value. When it appears, `value` is recorded; this
    /// is what lets `--two` and `--no-two` share an identity.
    Flag { value: bool },

    /// The option takes exactly `arity` values
    Value { arity: NonZeroUsize },
}

/// An option or flag, along with every spelling it answers to (like `-o`
/// and `--output`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec<Id> {
    pub id: Id,
    pub spellings: Vec<String>,
    pub kind: OptionKind,
}

impl<Id> OptionSpec<Id> {
    pub fn new(
        id: Id,
        spellings: impl IntoIterator<Item = impl Into<String>>,
        kind: OptionKind,
    ) -> Self {
        Self {
            id,
            spellings: spellings.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    /// The number of values this option consumes; 0 for flags.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.kind {
            OptionKind::Flag { .. } => 0,
            OptionKind::Value { arity } => arity.get(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn takes_value(&self) -> bool {
        matches!(self.kind, OptionKind::Value { .. })
    }
}

/// How many tokens a positional argument consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many tokens
    Exactly(NonZeroUsize),

    /// Every remaining token, possibly none
    Rest,

    /// The rest of the line, verbatim, starting at the next token
    Trailer,
}

impl Arity {
    pub const ONE: Self = Arity::Exactly(NonZeroUsize::MIN);

    /// True for arities that consume everything that's left
    #[inline]
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Arity::Rest | Arity::Trailer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSpec<Id> {
    pub id: Id,
    pub arity: Arity,
}

/**
The full set of options and positional arguments for a single command.

```
use std::num::NonZeroUsize;
use lineopt::{Arity, Schema};

let schema = Schema::new()
    .flag("verbose", ["-v", "--verbose"])
    .switch("color", ["--color"], ["--no-color"])
    .option("target", ["-t", "--target"])
    .option_with_arity("point", ["--point"], NonZeroUsize::new(2).unwrap())
    .argument("channel", Arity::ONE)
    .argument("message", Arity::Trailer);

assert_eq!(schema.options().len(), 5);
assert_eq!(schema.positionals().len(), 2);
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema<Id> {
    options: Vec<OptionSpec<Id>>,
    positionals: Vec<PositionalSpec<Id>>,
}

impl<Id> Default for Schema<Id> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            positionals: Vec::new(),
        }
    }
}

impl<Id> Schema<Id> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn options(&self) -> &[OptionSpec<Id>] {
        &self.options
    }

    #[must_use]
    pub fn positionals(&self) -> &[PositionalSpec<Id>] {
        &self.positionals
    }

    #[must_use]
    pub fn with_option(mut self, option: OptionSpec<Id>) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn with_positional(mut self, positional: PositionalSpec<Id>) -> Self {
        self.positionals.push(positional);
        self
    }

    /// Add an option that takes a single value
    #[must_use]
    pub fn option(self, id: Id, spellings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.option_with_arity(id, spellings, NonZeroUsize::MIN)
    }

    /// Add an option that takes exactly `arity` values
    #[must_use]
    pub fn option_with_arity(
        self,
        id: Id,
        spellings: impl IntoIterator<Item = impl Into<String>>,
        arity: NonZeroUsize,
    ) -> Self {
        self.with_option(OptionSpec::new(id, spellings, OptionKind::Value { arity }))
    }

    /// Add a flag, which records `true` when it appears
    #[must_use]
    pub fn flag(self, id: Id, spellings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.with_option(OptionSpec::new(id, spellings, OptionKind::Flag { value: true }))
    }

    /// Add an on/off pair of flags sharing one identity, like `--color` and
    /// `--no-color`. Whichever appears last wins.
    #[must_use]
    pub fn switch(
        self,
        id: Id,
        on: impl IntoIterator<Item = impl Into<String>>,
        off: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self
    where
        Id: Clone,
    {
        let off = OptionSpec::new(id.clone(), off, OptionKind::Flag { value: false });

        self.with_option(OptionSpec::new(id, on, OptionKind::Flag { value: true }))
            .with_option(off)
    }

    #[must_use]
    pub fn argument(self, id: Id, arity: Arity) -> Self {
        self.with_positional(PositionalSpec { id, arity })
    }

    pub(crate) fn into_parts(self) -> (Vec<OptionSpec<Id>>, Vec<PositionalSpec<Id>>) {
        (self.options, self.positionals)
    }
}

/**
Split an option spelling into its prefix and its name. The prefix is the
first character, or the first two if they're the same character (so `--`
is a prefix but `-+` isn't). A spelling that starts with an alphanumeric
character has no prefix.

```
use lineopt::schema::split_prefix;

assert_eq!(split_prefix("--one"), ("--", "one"));
assert_eq!(split_prefix("-1"), ("-", "1"));
assert_eq!(split_prefix("/one"), ("/", "one"));
assert_eq!(split_prefix("one"), ("", "one"));
```
*/
#[must_use]
pub fn split_prefix(spelling: &str) -> (&str, &str) {
    let mut chars = spelling.chars();

    match chars.next() {
        None => ("", ""),
        Some(first) if first.is_alphanumeric() => ("", spelling),
        Some(first) => {
            let width = first.len_utf8();
            let prefix = match chars.next() {
                Some(second) if second == first => width * 2,
                _ => width,
            };

            spelling.split_at(prefix)
        }
    }
}
