use thiserror::Error;
use vetbot_models::GuildId;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unknown guild '{0}'")]
    UnknownGuild(GuildId),

    #[error("Unknown custom command '{1}' for guild '{0}'")]
    UnknownCustomCommand(GuildId, String),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
