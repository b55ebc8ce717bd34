use vetbot_models::Capability;

use super::command::{BuiltInAction, BuiltInCommand};

/// The process-wide built-in command tree, constructed once and passed by
/// reference wherever resolution happens.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<BuiltInCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: vec![
                BuiltInCommand::new(
                    vec!["ping"],
                    "Check if the bot is running.",
                    BuiltInAction::Ping,
                ),
                BuiltInCommand::new(
                    vec!["help"],
                    "Show the available commands.",
                    BuiltInAction::Help,
                ),
                BuiltInCommand::new(
                    vec!["prefix"],
                    "Set the prefix of the bot.",
                    BuiltInAction::SetPrefix,
                )
                .with_capabilities([Capability::Administrator]),
                BuiltInCommand::new(
                    vec!["command", "commands"],
                    "Allows managing custom vetting commands.",
                    BuiltInAction::ListCustomCommands,
                )
                .with_capabilities([Capability::Administrator])
                .with_sub_commands(vec![
                    BuiltInCommand::new(
                        vec!["new", "update-set", "set", "="],
                        "Creates a vetting command.",
                        BuiltInAction::NewCustomCommand,
                    ),
                    BuiltInCommand::new(
                        vec!["add", "update-add", "+"],
                        "Adds behavior to a command.",
                        BuiltInAction::AddToCustomCommand,
                    ),
                    BuiltInCommand::new(
                        vec!["remove", "update-remove", "-"],
                        "Removes behavior from a command.",
                        BuiltInAction::RemoveFromCustomCommand,
                    ),
                    BuiltInCommand::new(
                        vec!["delete"],
                        "Deletes a command.",
                        BuiltInAction::DeleteCustomCommand,
                    ),
                ]),
                BuiltInCommand::new(
                    vec!["mod", "mods"],
                    "Manages the moderator roles.",
                    BuiltInAction::ListModeratorRoles,
                )
                .with_capabilities([Capability::Administrator])
                .with_sub_commands(vec![
                    BuiltInCommand::new(
                        vec!["add"],
                        "Adds a role to the roles that are moderators.",
                        BuiltInAction::AddModeratorRoles,
                    ),
                    BuiltInCommand::new(
                        vec!["remove"],
                        "Removes a role from the roles that are moderators.",
                        BuiltInAction::RemoveModeratorRoles,
                    ),
                ]),
            ],
        }
    }

    /// Case-sensitive lookup against primary names and aliases.
    pub fn find(&self, name: &str) -> Option<&BuiltInCommand> {
        self.commands.iter().find(|command| command.has_name(name))
    }

    pub fn commands(&self) -> &[BuiltInCommand] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_primary_name_and_alias() {
        let registry = CommandRegistry::new();

        let by_primary = registry.find("command").unwrap();
        let by_alias = registry.find("commands").unwrap();
        assert!(std::ptr::eq(by_primary, by_alias));
        assert_eq!(by_primary.action(), BuiltInAction::ListCustomCommands);
    }

    #[test]
    fn find_is_case_sensitive() {
        let registry = CommandRegistry::new();
        assert!(registry.find("ping").is_some());
        assert!(registry.find("Ping").is_none());
        assert!(registry.find("unknown").is_none());
    }

    #[test]
    fn admin_commands_require_administrator() {
        let registry = CommandRegistry::new();
        for name in ["prefix", "command", "mod"] {
            let command = registry.find(name).unwrap();
            assert!(
                command
                    .required_capabilities()
                    .contains(Capability::Administrator),
                "{name} should require administrator"
            );
        }
        for name in ["ping", "help"] {
            assert!(registry.find(name).unwrap().required_capabilities().is_empty());
        }
    }
}
