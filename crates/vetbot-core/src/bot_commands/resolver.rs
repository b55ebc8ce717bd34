use vetbot_models::{CustomCommandConfig, GuildId, Principal};

use super::{command::Command, permissions::can_execute, registry::CommandRegistry};

/// Resolution result. Denied and NoMatch are both silent for the message
/// author: restricted commands must not leak their existence through error
/// messages.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    NoMatch,
    Denied,
    Resolved { command: Command<'a>, args: &'a str },
}

fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (text, ""),
    }
}

/// Pure, synchronous command resolution over pre-fetched guild state.
pub struct CommandResolver<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> CommandResolver<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Strip the guild prefix, look the first word up among built-in then
    /// custom command names, and walk subcommands while permission checks
    /// pass. Permission is evaluated on every visited node and once more on
    /// the final leaf; any denial stops resolution immediately.
    pub fn resolve<'a>(
        &self,
        prefix: &str,
        custom_commands: &'a [CustomCommandConfig],
        guild_id: GuildId,
        principal: &Principal,
        message: &'a str,
    ) -> Resolution<'a>
    where
        'r: 'a,
    {
        let text = match message.strip_prefix(prefix) {
            Some(stripped) => stripped.trim(),
            None => return Resolution::NoMatch,
        };

        let (name, mut args) = split_first_word(text);
        let mut command = match self.find_command(name, custom_commands) {
            Some(command) => command,
            None => return Resolution::NoMatch,
        };

        while !command.sub_commands().is_empty() {
            if !can_execute(command, guild_id, principal) {
                return Resolution::Denied;
            }
            let (sub_name, sub_args) = split_first_word(args);
            match command.find_sub_command(sub_name) {
                Some(sub) => {
                    command = Command::BuiltIn(sub);
                    args = sub_args;
                }
                None => break,
            }
        }

        if !can_execute(command, guild_id, principal) {
            return Resolution::Denied;
        }

        Resolution::Resolved { command, args }
    }

    fn find_command<'a>(
        &self,
        name: &str,
        custom_commands: &'a [CustomCommandConfig],
    ) -> Option<Command<'a>>
    where
        'r: 'a,
    {
        if let Some(command) = self.registry.find(name) {
            return Some(Command::BuiltIn(command));
        }

        let folded = name.to_lowercase();
        custom_commands
            .iter()
            .find(|config| config.name == folded)
            .map(Command::Custom)
    }
}
