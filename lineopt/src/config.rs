use std::{collections::BTreeSet, fmt};

/**
Knobs that change how a line is parsed, independently of which options and
arguments are declared.

```
use lineopt::ParserConfig;

// IRC-style commands: `/nick alice // the rest is a message`
let config = ParserConfig::default()
    .with_prefixes(["/"])
    .with_end_of_options("//")
    .allow_interspersed_args(false);

assert!(config.option_prefixes.contains("/"));
assert!(!config.option_prefixes.contains("-"));
```
*/
#[derive(Clone)]
pub struct ParserConfig {
    /// Characters (or doubled characters, like `--`) that can start an
    /// option. Only single-character prefixes decide whether a token looks
    /// like an option; a two-character prefix like `--` stops a token that
    /// isn't a known long option from being retried as a cluster of short
    /// options. The prefixes of every declared spelling are added to this
    /// set when a parser is built, and so is the single character of every
    /// doubled prefix.
    pub option_prefixes: BTreeSet<String>,

    /// A token that ends option scanning. Everything after it is positional.
    pub end_of_options: String,

    /// If true, options and positionals can be freely mixed. If false,
    /// option scanning stops at the first positional.
    pub allow_interspersed_args: bool,

    /// If true, unknown options are passed through as positionals instead
    /// of being rejected.
    pub ignore_unknown_options: bool,

    /// If true, a usage error doesn't fail the parse. Instead, whatever was
    /// parsed up to that point is returned, with the error attached. This is
    /// meant for callers that inspect a line without acting on it.
    pub resilient: bool,

    /// Applied to the name part of every option spelling (after the prefix),
    /// both when the parser is built and when a line is parsed. Use this to
    /// make options case-insensitive, for instance.
    pub normalize: Option<fn(&str) -> String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            option_prefixes: BTreeSet::from(["-".to_owned(), "--".to_owned()]),
            end_of_options: "--".to_owned(),
            allow_interspersed_args: true,
            ignore_unknown_options: false,
            resilient: false,
            normalize: None,
        }
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("option_prefixes", &self.option_prefixes)
            .field("end_of_options", &self.end_of_options)
            .field("allow_interspersed_args", &self.allow_interspersed_args)
            .field("ignore_unknown_options", &self.ignore_unknown_options)
            .field("resilient", &self.resilient)
            .field("normalize", &self.normalize.map(|_| "fn(&str) -> String"))
            .finish()
    }
}

impl ParserConfig {
    /// Replace the set of option prefixes
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.option_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_end_of_options(mut self, marker: impl Into<String>) -> Self {
        self.end_of_options = marker.into();
        self
    }

    #[must_use]
    pub fn allow_interspersed_args(mut self, allow: bool) -> Self {
        self.allow_interspersed_args = allow;
        self
    }

    #[must_use]
    pub fn ignore_unknown_options(mut self, ignore: bool) -> Self {
        self.ignore_unknown_options = ignore;
        self
    }

    #[must_use]
    pub fn resilient(mut self, resilient: bool) -> Self {
        self.resilient = resilient;
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: fn(&str) -> String) -> Self {
        self.normalize = Some(normalize);
        self
    }
}
