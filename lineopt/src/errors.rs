/*!
Error types for [`lineopt`][crate].

[`UsageError`] is the problem with a *line*: the user typed something that
doesn't fit the schema. These are expected, carry enough context to be
rendered back to the user (see [`printers`][crate::printers]), and stop the
parse as soon as they happen.

[`SchemaError`] is a problem with the *schema*, which is a programming error.
These are reported when the parser is built, never while parsing.
*/

use lineopt_parser::ArityError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// An option-looking token didn't match any declared spelling.
    /// `suggestions` has the long spellings that start with the attempted
    /// spelling, in declaration order.
    #[error("no such option: {spelling}")]
    NoSuchOption {
        spelling: String,
        suggestions: Vec<String>,
    },

    /// A known option was used incorrectly: a flag got a value, or an option
    /// ran out of values.
    #[error("{message}")]
    BadOptionUsage { spelling: String, message: String },

    /// The positional arguments didn't fit, for instance because there were
    /// too many of them.
    #[error("{message}")]
    BadArgumentUsage { message: String },

    /// The line ran out before every positional argument was filled.
    #[error("missing argument: {0}")]
    Arity(#[from] ArityError),
}

impl UsageError {
    /// The option spelling this error is about, if any
    #[must_use]
    pub fn spelling(&self) -> Option<&str> {
        match self {
            UsageError::NoSuchOption { spelling, .. }
            | UsageError::BadOptionUsage { spelling, .. } => Some(spelling),
            UsageError::BadArgumentUsage { .. } | UsageError::Arity(_) => None,
        }
    }

    pub(crate) fn no_such_option(spelling: impl Into<String>) -> Self {
        UsageError::NoSuchOption {
            spelling: spelling.into(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn flag_got_value(spelling: &str) -> Self {
        UsageError::BadOptionUsage {
            spelling: spelling.to_owned(),
            message: format!("{spelling} option does not take a value"),
        }
    }

    pub(crate) fn option_needs_values(spelling: &str, arity: usize) -> Self {
        let message = match arity {
            1 => format!("{spelling} option requires an argument"),
            arity => format!("{spelling} option requires {arity} arguments"),
        };

        UsageError::BadOptionUsage {
            spelling: spelling.to_owned(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("option #{index} has no spellings")]
    NoSpellings { index: usize },

    #[error("option spelling {spelling:?} {reason}")]
    InvalidSpelling {
        spelling: String,
        reason: &'static str,
    },

    #[error("option spelling {spelling:?} is declared more than once")]
    DuplicateSpelling { spelling: String },

    #[error("option prefix {prefix:?} must be a non-alphanumeric character, possibly doubled")]
    InvalidPrefix { prefix: String },

    #[error("the end-of-options marker can't be empty")]
    EmptyEndOfOptions,

    #[error("positional argument #{index} consumes the rest of the line, so it must be last")]
    UnboundedNotLast { index: usize },
}
