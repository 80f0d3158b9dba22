#![allow(dead_code)]

use std::collections::BTreeMap;

use lineopt::{Arity, LineParser, OptionParser, ParseResult, ParserConfig, Schema, Value};

pub type Id = &'static str;

pub fn parser(schema: Schema<Id>) -> OptionParser<Id> {
    parser_with(schema, ParserConfig::default())
}

pub fn parser_with(schema: Schema<Id>, config: ParserConfig) -> OptionParser<Id> {
    OptionParser::new(schema, config).expect("schema should be valid")
}

/// `-1/--one VALUE` followed by a trailer
pub fn one_and_trailer() -> OptionParser<Id> {
    parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .argument("trailer", Arity::Trailer),
    )
}

/// `-1/--one VALUE` and the `-2/--two` / `--no-two` switch, with no
/// positionals
pub fn one_and_two() -> OptionParser<Id> {
    parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .switch("two", ["-2", "--two"], ["--no-two"]),
    )
}

/// Every option and positional value that isn't "empty": false flags, empty
/// strings, and empty lists are left out, so that expectations only have to
/// mention what actually showed up on the line.
pub fn present<'line>(result: &ParseResult<'line, Id>) -> BTreeMap<Id, Value<'line>> {
    result
        .options
        .iter()
        .map(|(&id, value)| (id, value))
        .chain(result.positionals.iter().map(|(id, value)| (*id, value)))
        .filter(|(_, value)| match value {
            Value::Flag(flag) => *flag,
            Value::Single(value) => !value.is_empty(),
            Value::Multiple(values) => !values.is_empty(),
        })
        .map(|(id, value)| (id, value.clone()))
        .collect()
}

/// Parse `line` and collect what was present, panicking on a usage error
pub fn parse_present(parser: &OptionParser<Id>, line: &'static str) -> BTreeMap<Id, Value<'static>> {
    let result = parser
        .parse(line)
        .unwrap_or_else(|error| panic!("{line:?} failed to parse: {error}"));

    present(&result)
}

pub fn expected<const N: usize>(
    entries: [(Id, Value<'static>); N],
) -> BTreeMap<Id, Value<'static>> {
    BTreeMap::from(entries)
}
