use lineopt::UsageError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("unknown command {name:?} (expected one of: {})", .known.join(", "))]
    UnknownCommand {
        name: String,
        known: Vec<&'static str>,
    },
}
