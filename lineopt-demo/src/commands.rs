use std::{collections::BTreeMap, num::NonZeroUsize};

use lineopt::{
    Arity, LineParser, OptionParser, ParseResult, ParseState, ParserConfig, Schema, SchemaError,
    Value,
};
use tracing::debug;

use crate::error::BotError;

pub type Id = &'static str;

/// The positional a command group uses to pick a subcommand
const SUBCOMMAND: Id = "subcommand";

const PAIR: NonZeroUsize = NonZeroUsize::new(2).unwrap();

/// One command on the path from the bot to the command that actually runs
#[derive(Debug)]
pub struct Invocation<'line> {
    pub command: &'static str,
    pub result: ParseResult<'line, Id>,
}

struct Command {
    name: &'static str,
    parser: OptionParser<Id>,
    subcommands: BTreeMap<&'static str, Command>,
}

impl Command {
    fn leaf(
        name: &'static str,
        schema: Schema<Id>,
        config: &ParserConfig,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name,
            parser: OptionParser::new(schema, config.clone())?,
            subcommands: BTreeMap::new(),
        })
    }

    /// A command whose first positional names one of `subcommands`. Options
    /// after the subcommand's name belong to the subcommand.
    fn group(
        name: &'static str,
        schema: Schema<Id>,
        config: &ParserConfig,
        subcommands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, SchemaError> {
        let schema = schema.argument(SUBCOMMAND, Arity::ONE);
        let config = config.clone().allow_interspersed_args(false);

        Ok(Self {
            name,
            parser: OptionParser::new(schema, config)?,
            subcommands: subcommands
                .into_iter()
                .map(|command| (command.name, command))
                .collect(),
        })
    }

    fn subcommand(&self, name: &str) -> Result<&Command, BotError> {
        self.subcommands
            .get(name)
            .ok_or_else(|| BotError::UnknownCommand {
                name: name.to_owned(),
                known: self.subcommands.keys().copied().collect(),
            })
    }

    fn run<'line>(
        &self,
        state: &mut ParseState<'line>,
        reject_extra: bool,
        path: &mut Vec<Invocation<'line>>,
    ) -> Result<(), BotError> {
        let mut result = self.parser.parse_partial(state)?;

        if self.subcommands.is_empty() {
            result.extra = state.pop_rest();

            if reject_extra {
                result = result.reject_extra()?;
            }

            path.push(Invocation {
                command: self.name,
                result,
            });
            return Ok(());
        }

        // In resilient mode, an incomplete parse has no subcommand to
        // continue with
        let subcommand = result
            .positional(&SUBCOMMAND)
            .and_then(Value::as_str)
            .map(|name| self.subcommand(name))
            .transpose()?;

        path.push(Invocation {
            command: self.name,
            result,
        });

        match subcommand {
            Some(subcommand) => {
                debug!(group = self.name, subcommand = subcommand.name, "descending");
                subcommand.run(&mut state.continuation(), reject_extra, path)
            }
            None => Ok(()),
        }
    }
}

/// The bot's whole command tree
pub struct Bot {
    root: Command,
    reject_extra: bool,
}

impl Bot {
    pub fn new(config: &ParserConfig, reject_extra: bool) -> Result<Self, SchemaError> {
        let say = Command::leaf(
            "say",
            Schema::new()
                .option("channel", ["-c", "--channel"])
                .flag("action", ["--me"])
                .argument("message", Arity::Trailer),
            config,
        )?;

        let nick = Command::leaf("nick", Schema::new().argument("name", Arity::ONE), config)?;

        let join = Command::leaf(
            "join",
            Schema::new()
                .option("key", ["-k", "--key"])
                .argument("channels", Arity::Rest),
            config,
        )?;

        let topic = Command::leaf(
            "topic",
            Schema::new()
                .switch("append", ["-a", "--append"], ["--replace"])
                .argument("channel", Arity::ONE)
                .argument("topic", Arity::Trailer),
            config,
        )?;

        let kick = Command::leaf(
            "kick",
            Schema::new()
                .argument("channel", Arity::ONE)
                .argument("nick", Arity::ONE)
                .argument("reason", Arity::Trailer),
            config,
        )?;

        let mute = Command::leaf(
            "mute",
            Schema::new()
                .option("duration", ["-t", "--time"])
                .option_with_arity("window", ["--between"], PAIR)
                .argument("nick", Arity::ONE),
            config,
        )?;

        let admin = Command::group(
            "admin",
            Schema::new().flag("dry_run", ["-n", "--dry-run"]),
            config,
            [kick, mute],
        )?;

        let root = Command::group(
            "bot",
            Schema::new().flag("quiet", ["-q", "--quiet"]),
            config,
            [say, nick, join, topic, admin],
        )?;

        Ok(Self { root, reject_extra })
    }

    pub fn commands(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.root.subcommands.keys().copied()
    }

    /// Parse a line, returning every command on the path to the one that
    /// would run
    pub fn dispatch<'line>(&self, line: &'line str) -> Result<Vec<Invocation<'line>>, BotError> {
        let mut state = ParseState::new(line);
        let mut path = Vec::new();

        self.root.run(&mut state, self.reject_extra, &mut path)?;
        Ok(path)
    }
}
