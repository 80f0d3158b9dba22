mod commands;
mod error;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use lineopt::{ParserConfig, printers};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{commands::Bot, error::BotError};

/// Read chat-bot commands from stdin, one per line, and show how each one
/// parses.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Option prefix; may be repeated. Defaults to `-` and `--`.
    #[arg(long = "prefix", value_name = "PREFIX")]
    prefixes: Vec<String>,

    /// Token that ends option parsing
    #[arg(long, default_value = "--")]
    end_of_options: String,

    /// Stop option parsing at the first positional argument
    #[arg(long)]
    strict_order: bool,

    /// Pass unknown options through as positional arguments
    #[arg(long)]
    ignore_unknown: bool,

    /// Show partial results instead of failing on usage errors
    #[arg(long)]
    resilient: bool,

    /// Match option names case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Fail on tokens left over after every argument is filled
    #[arg(long)]
    reject_extra: bool,

    /// Wrap error replies to this many columns
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Log filter to use when RUST_LOG isn't set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default()
            .with_end_of_options(self.end_of_options.as_str())
            .allow_interspersed_args(!self.strict_order)
            .ignore_unknown_options(self.ignore_unknown)
            .resilient(self.resilient);

        if !self.prefixes.is_empty() {
            config = config.with_prefixes(self.prefixes.iter().map(String::as_str));
        }

        if self.ignore_case {
            config = config.with_normalize(str::to_lowercase);
        }

        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = args.parser_config();
    let bot = Bot::new(&config, args.reject_extra).context("invalid command table")?;

    let commands: Vec<_> = bot.commands().collect();
    info!(?config, ?commands, "ready");

    let mut stdout = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read a line from stdin")?;

        if line.trim().is_empty() {
            continue;
        }

        match bot.dispatch(&line) {
            Ok(path) => {
                for step in &path {
                    if let Some(error) = &step.result.suppressed {
                        warn!(command = step.command, %error, "partial parse");
                    }
                }

                writeln!(stdout, "{path:#?}")?;
            }
            Err(BotError::Usage(error)) => {
                printers::write_usage_error(&mut stdout, &error, args.width)?;
            }
            Err(error) => writeln!(stdout, "error: {error}")?,
        }
    }

    Ok(())
}
