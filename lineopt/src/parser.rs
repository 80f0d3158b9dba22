/*!
The option parser: classifies tokens as options, option clusters, positionals,
or the end-of-options marker, and drives a [`ParseState`] through an option
scan followed by a positional scan.
*/

use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

use lineopt_parser::{ParseState, Token};
use tracing::{debug, trace};

use crate::{
    config::ParserConfig,
    errors::{SchemaError, UsageError},
    result::{ParseResult, Value},
    schema::{OptionKind, OptionSpec, PositionalSpec, Schema, split_prefix},
    unpack::unpack_args,
};

/**
The seam between this crate and a command framework. A framework that wants
to parse lines asks for "a parser for this schema" and gets back something
implementing [`LineParser`], usually an [`OptionParser`]; it never needs to
know how tokens are classified.
*/
pub trait LineParser<Id: Eq + Hash> {
    /// Parse a whole line. Tokens left over after every positional was
    /// filled end up in [`ParseResult::extra`].
    fn parse<'line>(&self, line: &'line str) -> Result<ParseResult<'line, Id>, UsageError>;

    /**
    Parse options and positionals from `state`, leaving anything that the
    positionals didn't consume in `state`. A nested command can then pick up
    from there with [`ParseState::continuation`].
    */
    fn parse_partial<'line>(
        &self,
        state: &mut ParseState<'line>,
    ) -> Result<ParseResult<'line, Id>, UsageError>;
}

/**
An [`OptionParser`] is built once from a [`Schema`] and a [`ParserConfig`],
and can then parse any number of lines. It's immutable after construction,
so it can be shared freely between threads; each parse uses its own
[`ParseState`].
*/
#[derive(Debug, Clone)]
pub struct OptionParser<Id> {
    options: Vec<OptionSpec<Id>>,
    positionals: Vec<PositionalSpec<Id>>,

    /// Normalized short spellings (`-x`), mapped to an index in `options`
    short: HashMap<String, usize>,

    /// Normalized long spellings, mapped to an index in `options`
    long: HashMap<String, usize>,

    /// Normalized long spellings in declaration order, for suggestions
    long_order: Vec<String>,

    /// The configured prefixes plus the prefix of every declared spelling,
    /// plus the single character of every doubled prefix
    prefixes: BTreeSet<String>,

    config: ParserConfig,
}

impl<Id> OptionParser<Id> {
    /**
    Build a parser, checking the schema and config for mistakes: duplicate
    spellings, spellings without a prefix or a name, malformed prefixes, an
    empty end-of-options marker, and positionals that consume the rest of
    the line without being last.
    */
    pub fn new(schema: Schema<Id>, config: ParserConfig) -> Result<Self, SchemaError> {
        if config.end_of_options.is_empty() {
            return Err(SchemaError::EmptyEndOfOptions);
        }

        if let Some(prefix) = config
            .option_prefixes
            .iter()
            .find(|prefix| prefix.is_empty() || split_prefix(prefix).0 != prefix.as_str())
        {
            return Err(SchemaError::InvalidPrefix {
                prefix: prefix.clone(),
            });
        }

        let (options, positionals) = schema.into_parts();

        let mut short = HashMap::new();
        let mut long = HashMap::new();
        let mut long_order = Vec::new();
        let mut prefixes = config.option_prefixes.clone();

        for (index, option) in options.iter().enumerate() {
            if option.spellings.is_empty() {
                return Err(SchemaError::NoSpellings { index });
            }

            for spelling in &option.spellings {
                let normalized = normalize(config.normalize, spelling).into_owned();
                let (prefix, name) = split_prefix(&normalized);

                if prefix.is_empty() {
                    return Err(SchemaError::InvalidSpelling {
                        spelling: spelling.clone(),
                        reason: "must start with a prefix character",
                    });
                }

                if name.is_empty() {
                    return Err(SchemaError::InvalidSpelling {
                        spelling: spelling.clone(),
                        reason: "has no name after its prefix",
                    });
                }

                if short.contains_key(&normalized) || long.contains_key(&normalized) {
                    return Err(SchemaError::DuplicateSpelling {
                        spelling: spelling.clone(),
                    });
                }

                prefixes.insert(prefix.to_owned());

                if prefix.chars().count() == 1 && name.chars().count() == 1 {
                    short.insert(normalized, index);
                } else {
                    long_order.push(normalized.clone());
                    long.insert(normalized, index);
                }
            }
        }

        // A token is only considered an option if its first character is a
        // prefix, so `--` alone would make `--long` spellings unreachable
        let doubled: Vec<String> = prefixes
            .iter()
            .filter(|prefix| prefix.chars().count() == 2)
            .map(|prefix| leading_chars(prefix, 1).to_owned())
            .collect();
        prefixes.extend(doubled);

        if let Some(index) = positionals
            .iter()
            .position(|positional| positional.arity.is_unbounded())
            .filter(|&index| index + 1 != positionals.len())
        {
            return Err(SchemaError::UnboundedNotLast { index });
        }

        Ok(Self {
            options,
            positionals,
            short,
            long,
            long_order,
            prefixes,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    #[must_use]
    pub fn options(&self) -> &[OptionSpec<Id>] {
        &self.options
    }

    #[must_use]
    pub fn positionals(&self) -> &[PositionalSpec<Id>] {
        &self.positionals
    }

    /// True if `text` starts with a single-character option prefix and has
    /// something after it
    fn looks_like_option(&self, text: &str) -> bool {
        let mut chars = text.chars();

        match (chars.next(), chars.next()) {
            (Some(first), Some(_)) => self.prefixes.contains(&text[..first.len_utf8()]),
            _ => false,
        }
    }

    /// Long spellings that start with `spelling`, in declaration order
    fn suggestions(&self, spelling: &str) -> Vec<String> {
        self.long_order
            .iter()
            .filter(|candidate| candidate.starts_with(spelling))
            .cloned()
            .collect()
    }
}

impl<Id> OptionParser<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    /// Scan for options until the line runs out, the end-of-options marker
    /// appears, or (if interspersed args aren't allowed) a positional
    /// appears.
    fn scan_options<'line>(
        &self,
        state: &mut ParseState<'line>,
        result: &mut ParseResult<'line, Id>,
    ) -> Result<(), UsageError> {
        while let Some(token) = state.pop() {
            if token.as_str() == self.config.end_of_options {
                trace!(?token, "end of options");
                return Ok(());
            } else if self.looks_like_option(token.as_str()) {
                self.dispatch_option(token, state, result)?;
            } else if self.config.allow_interspersed_args {
                trace!(?token, "positional candidate");
                state.push_left([token]);
            } else {
                trace!(?token, "positional ends option scanning");
                state.push_right([token]);
                return Ok(());
            }
        }

        Ok(())
    }

    /// Handle an option-looking token: try it as a long option, possibly
    /// with an `=value` attached, then fall back to a cluster of short
    /// options.
    fn dispatch_option<'line>(
        &self,
        token: Token<'line>,
        state: &mut ParseState<'line>,
        result: &mut ParseResult<'line, Id>,
    ) -> Result<(), UsageError> {
        let (spelling, explicit) = match token.split_once(b'=') {
            Some((spelling, value)) => (spelling, Some(value)),
            None => (token.clone(), None),
        };

        let spelling = normalize(self.config.normalize, spelling.as_str());

        if let Some(&index) = self.long.get(spelling.as_ref()) {
            return self.process_long(&self.options[index], &spelling, explicit, state, result);
        }

        // A token that starts with a two character prefix, like `--foo`, is
        // never retried as a cluster of short options.
        if !self.prefixes.contains(leading_chars(token.as_str(), 2)) {
            return self.process_short_cluster(token, state, result);
        }

        if self.config.ignore_unknown_options {
            trace!(?token, "unknown option passed through as positional");
            state.push_left([token]);
            return Ok(());
        }

        Err(UsageError::NoSuchOption {
            suggestions: self.suggestions(&spelling),
            spelling: spelling.into_owned(),
        })
    }

    fn process_long<'line>(
        &self,
        option: &OptionSpec<Id>,
        spelling: &str,
        explicit: Option<Token<'line>>,
        state: &mut ParseState<'line>,
        result: &mut ParseResult<'line, Id>,
    ) -> Result<(), UsageError> {
        let value = match option.kind {
            OptionKind::Flag { .. } if explicit.is_some() => {
                return Err(UsageError::flag_got_value(spelling));
            }
            OptionKind::Flag { value } => Value::Flag(value),
            OptionKind::Value { arity } => {
                state.push_right(explicit);

                state
                    .pop_fixed(arity.get())
                    .map(Value::fixed)
                    .map_err(|_| UsageError::option_needs_values(spelling, arity.get()))?
            }
        };

        trace!(spelling, id = ?option.id, ?value, "long option");
        result.record_option(option.id.clone(), value);
        Ok(())
    }

    /**
    Handle a token like `-abc` as a cluster of short options `-a`, `-b`,
    `-c`. The first option that takes a value ends the cluster: whatever is
    left of the token (if anything) becomes its first value.

    When unknown options are ignored, any unknown characters are collected
    and pushed back as a single positional candidate with the same prefix.
    That candidate is synthetic, so it has no offset in the line.
    */
    fn process_short_cluster<'line>(
        &self,
        token: Token<'line>,
        state: &mut ParseState<'line>,
        result: &mut ParseResult<'line, Id>,
    ) -> Result<(), UsageError> {
        let text = token.as_str();
        let mut chars = text.char_indices();

        let Some((_, prefix)) = chars.next() else {
            return Ok(());
        };

        let mut unknown = String::new();

        for (index, ch) in chars {
            let raw = format!("{prefix}{ch}");
            let spelling = normalize(self.config.normalize, &raw);

            let Some(&option_index) = self.short.get(spelling.as_ref()) else {
                if self.config.ignore_unknown_options {
                    unknown.push(ch);
                    continue;
                }

                return Err(UsageError::no_such_option(spelling));
            };

            let option = &self.options[option_index];

            match option.kind {
                OptionKind::Flag { value } => {
                    trace!(spelling = %spelling, id = ?option.id, "short flag");
                    result.record_option(option.id.clone(), Value::Flag(value));
                }
                OptionKind::Value { arity } => {
                    let rest = index + ch.len_utf8();

                    if rest < text.len() {
                        state.push_right([token.suffix(rest)]);
                    }

                    let value = state
                        .pop_fixed(arity.get())
                        .map(Value::fixed)
                        .map_err(|_| UsageError::option_needs_values(&spelling, arity.get()))?;

                    trace!(spelling = %spelling, id = ?option.id, ?value, "short option");
                    result.record_option(option.id.clone(), value);
                    break;
                }
            }
        }

        if !unknown.is_empty() {
            let leftover = Token::synthetic(format!("{prefix}{unknown}"));
            trace!(?leftover, "unknown short options passed through as positional");
            state.push_left([leftover]);
        }

        Ok(())
    }

    /// Fill the positionals, in declaration order
    fn scan_arguments<'line>(
        &self,
        state: &mut ParseState<'line>,
        result: &mut ParseResult<'line, Id>,
    ) -> Result<(), UsageError> {
        state.enter_argument_scan();

        let arities = self.positionals.iter().map(|positional| positional.arity);
        let values = unpack_args(state, arities)?;

        for (positional, value) in self.positionals.iter().zip(values) {
            result.record_positional(positional.id.clone(), value);
        }

        Ok(())
    }
}

impl<Id> LineParser<Id> for OptionParser<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    fn parse<'line>(&self, line: &'line str) -> Result<ParseResult<'line, Id>, UsageError> {
        let mut state = ParseState::new(line);
        let mut result = self.parse_partial(&mut state)?;

        result.extra = state.pop_rest();

        debug!(
            options = result.options.len(),
            positionals = result.positionals.len(),
            extra = result.extra.len(),
            complete = result.is_complete(),
            "parsed line"
        );

        Ok(result)
    }

    fn parse_partial<'line>(
        &self,
        state: &mut ParseState<'line>,
    ) -> Result<ParseResult<'line, Id>, UsageError> {
        let mut result = ParseResult::default();

        let outcome = self
            .scan_options(state, &mut result)
            .and_then(|()| self.scan_arguments(state, &mut result));

        match outcome {
            Ok(()) => Ok(result),
            Err(error) if self.config.resilient => {
                debug!(%error, "suppressed usage error in resilient mode");

                // Positional candidates set aside before the error stay
                // visible to whoever drains the state next
                state.enter_argument_scan();
                result.suppressed = Some(error);
                Ok(result)
            }
            Err(error) => Err(error),
        }
    }
}

/// Apply the configured normalization to the name part of a spelling
fn normalize<'a>(normalize: Option<fn(&str) -> String>, spelling: &'a str) -> Cow<'a, str> {
    match normalize {
        None => Cow::Borrowed(spelling),
        Some(normalize) => {
            let (prefix, name) = split_prefix(spelling);
            Cow::Owned(format!("{prefix}{}", normalize(name)))
        }
    }
}

/// The first `count` chars of `text`, or all of it if it's shorter
fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
