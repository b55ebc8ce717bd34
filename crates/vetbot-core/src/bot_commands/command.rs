use vetbot_models::{Capability, CapabilitySet, CustomCommandConfig};

/// What a built-in command does once resolved and authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInAction {
    Ping,
    Help,
    SetPrefix,
    ListCustomCommands,
    NewCustomCommand,
    AddToCustomCommand,
    RemoveFromCustomCommand,
    DeleteCustomCommand,
    ListModeratorRoles,
    AddModeratorRoles,
    RemoveModeratorRoles,
}

/// A process-wide command definition, constructed once at registry build
/// time. The first name is the primary one, the rest are aliases.
#[derive(Debug, PartialEq, Eq)]
pub struct BuiltInCommand {
    names: Vec<&'static str>,
    quick_help: &'static str,
    required_capabilities: CapabilitySet,
    sub_commands: Vec<BuiltInCommand>,
    action: BuiltInAction,
}

impl BuiltInCommand {
    pub fn new(names: Vec<&'static str>, quick_help: &'static str, action: BuiltInAction) -> Self {
        Self {
            names,
            quick_help,
            required_capabilities: CapabilitySet::none(),
            sub_commands: Vec::new(),
            action,
        }
    }

    pub fn with_capabilities<const N: usize>(mut self, capabilities: [Capability; N]) -> Self {
        self.required_capabilities = capabilities.into();
        self
    }

    pub fn with_sub_commands(mut self, sub_commands: Vec<BuiltInCommand>) -> Self {
        self.sub_commands = sub_commands;
        self
    }

    pub fn primary_name(&self) -> &'static str {
        self.names[0]
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    pub fn quick_help(&self) -> &'static str {
        self.quick_help
    }

    pub fn required_capabilities(&self) -> &CapabilitySet {
        &self.required_capabilities
    }

    pub fn sub_commands(&self) -> &[BuiltInCommand] {
        &self.sub_commands
    }

    pub fn action(&self) -> BuiltInAction {
        self.action
    }
}

/// A resolved command: either a process-wide built-in or a per-guild custom
/// command materialized from its configuration for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    BuiltIn(&'a BuiltInCommand),
    Custom(&'a CustomCommandConfig),
}

impl<'a> Command<'a> {
    pub fn primary_name(&self) -> &'a str {
        match self {
            Self::BuiltIn(command) => command.primary_name(),
            Self::Custom(config) => &config.name,
        }
    }

    pub fn sub_commands(&self) -> &'a [BuiltInCommand] {
        match self {
            Self::BuiltIn(command) => command.sub_commands(),
            Self::Custom(_) => &[],
        }
    }

    pub fn find_sub_command(&self, name: &str) -> Option<&'a BuiltInCommand> {
        self.sub_commands().iter().find(|sub| sub.has_name(name))
    }
}

/// Command handling status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandHandlingStatus {
    /// Command handled.
    #[default]
    Handled,
    /// Command denied.
    Denied,
    /// Command ignored.
    Ignored,
}

/// Result action.
#[derive(Debug, PartialEq, Eq)]
pub enum ResultAction {
    /// Reply in the invoking channel.
    Reply(String),
}

/// Command execution result.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandExecutionResult {
    /// Handling status.
    pub handling_status: CommandHandlingStatus,
    /// Actions.
    pub result_actions: Vec<ResultAction>,
}

impl CommandExecutionResult {
    /// Create builder instance.
    pub fn builder() -> CommandExecutionResultBuilder {
        CommandExecutionResultBuilder::default()
    }
}

/// Command execution result builder.
#[derive(Debug, Default)]
pub struct CommandExecutionResultBuilder {
    handling_status: CommandHandlingStatus,
    result_actions: Vec<ResultAction>,
}

impl CommandExecutionResultBuilder {
    /// Set ignored result.
    pub fn ignored(mut self) -> Self {
        self.handling_status = CommandHandlingStatus::Ignored;
        self
    }

    /// Set denied result.
    pub fn denied(mut self) -> Self {
        self.handling_status = CommandHandlingStatus::Denied;
        self
    }

    /// Set handled result.
    pub fn handled(mut self) -> Self {
        self.handling_status = CommandHandlingStatus::Handled;
        self
    }

    /// Add result action.
    pub fn with_action(mut self, action: ResultAction) -> Self {
        self.result_actions.push(action);
        self
    }

    /// Add multiple result actions.
    pub fn with_actions(mut self, actions: Vec<ResultAction>) -> Self {
        self.result_actions.extend(actions);
        self
    }

    /// Build execution result.
    pub fn build(self) -> CommandExecutionResult {
        CommandExecutionResult {
            handling_status: self.handling_status,
            result_actions: self.result_actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use vetbot_models::{Capability, GuildId};

    use super::*;

    #[test]
    fn built_in_names() {
        let command = BuiltInCommand::new(vec!["mod", "mods"], "help", BuiltInAction::Ping)
            .with_capabilities([Capability::Administrator]);
        assert_eq!(command.primary_name(), "mod");
        assert!(command.has_name("mods"));
        assert!(!command.has_name("Mod"));
        assert!(command
            .required_capabilities()
            .contains(Capability::Administrator));
    }

    #[test]
    fn custom_commands_have_no_sub_commands() {
        let config = CustomCommandConfig::new(GuildId(1), "vet");
        let command = Command::Custom(&config);
        assert_eq!(command.primary_name(), "vet");
        assert!(command.sub_commands().is_empty());
        assert_eq!(command.find_sub_command("new"), None);
    }

    #[test]
    fn find_sub_command_matches_aliases() {
        let command = BuiltInCommand::new(vec!["command"], "help", BuiltInAction::Ping)
            .with_sub_commands(vec![BuiltInCommand::new(
                vec!["new", "update-set", "set", "="],
                "help",
                BuiltInAction::NewCustomCommand,
            )]);
        let command = Command::BuiltIn(&command);
        let sub = command.find_sub_command("=").unwrap();
        assert_eq!(sub.primary_name(), "new");
        assert_eq!(command.find_sub_command("nope"), None);
    }
}
