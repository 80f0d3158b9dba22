/*!
Rendering usage errors back to whoever typed the line. Chat replies are
usually length-limited, so [`write_usage_error`] wraps to a given width.
*/

use std::{
    fmt::Display,
    io::{self, Write as _},
};

use indent_write::io::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;
use lineopt_parser::ArityError;

use crate::errors::UsageError;

/// Replies narrower than this are wrapped at this width anyway
const MIN_WIDTH: usize = 20;

/// The error itself, without any suggestions
fn headline(error: &UsageError) -> impl Display {
    lazy_format! {
        match (error) {
            UsageError::NoSuchOption { spelling, .. } => "no such option: {spelling}",
            UsageError::BadOptionUsage { message, .. } => "{message}",
            UsageError::BadArgumentUsage { message } => "{message}",
            UsageError::Arity(ArityError { expected: 1, .. }) => "missing argument",
            UsageError::Arity(ArityError { expected, available }) =>
                "missing arguments: expected {expected}, got {available}",
        }
    }
}

fn suggestion_hint(suggestions: &[String]) -> impl Display {
    lazy_format! {
        match (suggestions) {
            [] => "",
            [single] => " (did you mean {single}?)",
            several => (
                " (possible options: {list})",
                list = several.iter().join_with(", "),
            ),
        }
    }
}

/**
Describe a usage error on a single line, including any suggestions.

```
use lineopt::{UsageError, printers::usage_error};

let error = UsageError::NoSuchOption {
    spelling: "--co".to_owned(),
    suggestions: vec!["--color".to_owned(), "--config".to_owned()],
};

assert_eq!(
    usage_error(&error).to_string(),
    "no such option: --co (possible options: --color, --config)",
);
```
*/
pub fn usage_error(error: &UsageError) -> impl Display {
    lazy_format! {
        match (error) {
            UsageError::NoSuchOption { suggestions, .. } => (
                "{headline}{hint}",
                headline = headline(error),
                hint = suggestion_hint(suggestions),
            ),
            _ => ("{headline}", headline = headline(error)),
        }
    }
}

/**
Write a usage error as a reply, wrapped to `width` columns. Continuation
lines are indented. If there are several suggestions, they're listed one per
line under the error.
*/
pub fn write_usage_error(
    out: &mut (impl io::Write + ?Sized),
    error: &UsageError,
    width: usize,
) -> io::Result<()> {
    let message = lazy_format!("error: {}", headline(error)).to_string();
    let options = textwrap::Options::new(width.max(MIN_WIDTH)).subsequent_indent("  ");

    textwrap::wrap(&message, options)
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))?;

    match error {
        UsageError::NoSuchOption { suggestions, .. } => match suggestions.as_slice() {
            [] => Ok(()),
            [single] => writeln!(out, "  did you mean {single}?"),
            several => {
                writeln!(out, "  possible options:")?;

                let mut out = IndentWriter::new("    ", out);
                several
                    .iter()
                    .try_for_each(|suggestion| writeln!(out, "{suggestion}"))
            }
        },
        _ => Ok(()),
    }
}
