use std::{borrow::Cow, collections::HashMap, hash::Hash};

use joinery::JoinableIterator;

use crate::errors::UsageError;

/// A value recorded for an option or positional argument. Values borrow from
/// the parsed line wherever possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value<'line> {
    /// A flag appeared; this is the value it records
    Flag(bool),

    /// A single value, from an option or positional with an arity of 1, or
    /// a trailer
    Single(Cow<'line, str>),

    /// Several values, from an option or positional with an arity greater
    /// than 1, or from a positional that consumes the rest of the line
    Multiple(Vec<Cow<'line, str>>),
}

impl<'line> Value<'line> {
    /// Build a value from the output of a fixed-arity pop: a single value
    /// if there's exactly one, otherwise a list.
    #[must_use]
    pub fn fixed(values: Vec<Cow<'line, str>>) -> Self {
        match <[_; 1]>::try_from(values) {
            Ok([value]) => Value::Single(value),
            Err(values) => Value::Multiple(values),
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            Value::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Single(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Cow<'line, str>]> {
        match self {
            Value::Multiple(values) => Some(values),
            _ => None,
        }
    }

    /// Detach this value from the line it was parsed from
    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Flag(flag) => Value::Flag(flag),
            Value::Single(value) => Value::Single(Cow::Owned(value.into_owned())),
            Value::Multiple(values) => Value::Multiple(
                values
                    .into_iter()
                    .map(|value| Cow::Owned(value.into_owned()))
                    .collect(),
            ),
        }
    }
}

impl<'line> From<&'line str> for Value<'line> {
    fn from(value: &'line str) -> Self {
        Value::Single(Cow::Borrowed(value))
    }
}

impl From<bool> for Value<'_> {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

impl<'line, const N: usize> From<[&'line str; N]> for Value<'line> {
    fn from(values: [&'line str; N]) -> Self {
        Value::Multiple(values.into_iter().map(Cow::Borrowed).collect())
    }
}

/**
Everything parsed out of a single line.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'line, Id: Eq + Hash> {
    /// The last value recorded for each option that appeared
    pub options: HashMap<Id, Value<'line>>,

    /// Every option and positional occurrence, in the order they were
    /// processed. An option that appears more than once is listed once for
    /// each appearance.
    pub order: Vec<(Id, Value<'line>)>,

    /// Positional values, in declaration order
    pub positionals: Vec<(Id, Value<'line>)>,

    /// Tokens that were left over after every positional was filled
    pub extra: Vec<Cow<'line, str>>,

    /// In resilient mode, the usage error that cut the parse short
    pub suppressed: Option<UsageError>,
}

impl<Id: Eq + Hash> Default for ParseResult<'_, Id> {
    fn default() -> Self {
        Self {
            options: HashMap::new(),
            order: Vec::new(),
            positionals: Vec::new(),
            extra: Vec::new(),
            suppressed: None,
        }
    }
}

impl<'line, Id: Eq + Hash + Clone> ParseResult<'line, Id> {
    pub(crate) fn record_option(&mut self, id: Id, value: Value<'line>) {
        self.order.push((id.clone(), value.clone()));
        self.options.insert(id, value);
    }

    pub(crate) fn record_positional(&mut self, id: Id, value: Value<'line>) {
        self.order.push((id.clone(), value.clone()));
        self.positionals.push((id, value));
    }
}

impl<'line, Id: Eq + Hash> ParseResult<'line, Id> {
    /// The last value recorded for an option
    #[must_use]
    pub fn option(&self, id: &Id) -> Option<&Value<'line>> {
        self.options.get(id)
    }

    /// The value of a flag; false if it never appeared
    #[must_use]
    pub fn flag(&self, id: &Id) -> bool {
        self.option(id)
            .and_then(Value::as_flag)
            .unwrap_or(false)
    }

    /// The value of a positional argument
    #[must_use]
    pub fn positional(&self, id: &Id) -> Option<&Value<'line>> {
        self.positionals
            .iter()
            .find(|(positional, _)| positional == id)
            .map(|(_, value)| value)
    }

    /// False if the parse was cut short by a suppressed usage error
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.suppressed.is_none()
    }

    /**
    Fail if there were any tokens left after the positionals were filled.
    Frameworks that don't want to silently ignore stray arguments can call
    this after parsing.
    */
    pub fn reject_extra(self) -> Result<Self, UsageError> {
        match self.extra.as_slice() {
            [] => Ok(self),
            [single] => Err(UsageError::BadArgumentUsage {
                message: format!("got unexpected extra argument ({single})"),
            }),
            extra => Err(UsageError::BadArgumentUsage {
                message: format!(
                    "got unexpected extra arguments ({})",
                    extra.iter().join_with(' ')
                ),
            }),
        }
    }
}
