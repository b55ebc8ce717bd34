//! Commands module.

pub(crate) mod command;
pub mod commands;
pub(crate) mod executor;
mod permissions;
mod registry;
mod resolver;

#[cfg(test)]
pub(crate) use commands::tests::CommandContextTest;
pub use commands::{BotCommand, CommandContext};
pub use executor::CommandExecutorInterface;
#[cfg(any(test, feature = "testkit"))]
pub use executor::MockCommandExecutorInterface;
pub use permissions::can_execute;
pub use registry::CommandRegistry;
pub use resolver::{CommandResolver, Resolution};

pub use self::command::{
    BuiltInAction, BuiltInCommand, Command, CommandExecutionResult, CommandHandlingStatus,
    ResultAction,
};
