/*!
Option parsing for single lines of free text, like chat messages addressed to
a bot. Give [`lineopt`][crate] a [`Schema`] of options and positional
arguments, and it splits a line into option occurrences, positional values,
and (optionally) a *trailer*: the rest of the line, sliced verbatim from the
original text so that its whitespace survives.

```
use lineopt::{Arity, LineParser, OptionParser, ParserConfig, Schema, Value};

let schema = Schema::new()
    .option("one", ["-1", "--one"])
    .flag("two", ["-2", "--two"])
    .argument("message", Arity::Trailer);

let parser = OptionParser::new(schema, ParserConfig::default()).unwrap();
let result = parser.parse("-21hey hi  there").unwrap();

assert_eq!(result.option(&"two"), Some(&Value::Flag(true)));
assert_eq!(result.option(&"one"), Some(&Value::from("hey")));
assert_eq!(result.positional(&"message"), Some(&Value::from("hi  there")));
```

This is not a shell lexer: there's no quoting and no escaping. Tokens are
runs of non-whitespace. Type conversion, defaults, help text, and command
dispatch are left to whatever framework sits on top; see [`LineParser`] for
the seam between the two.
*/

pub mod config;
pub mod errors;
pub mod parser;
pub mod printers;
pub mod result;
pub mod schema;
pub mod unpack;

pub use config::ParserConfig;
pub use errors::{SchemaError, UsageError};
pub use lineopt_parser::{ArityError, ParseState, Token, Tokenizer};
pub use parser::{LineParser, OptionParser};
pub use result::{ParseResult, Value};
pub use schema::{Arity, OptionKind, OptionSpec, PositionalSpec, Schema};
pub use unpack::unpack_args;
