pub(crate) mod create_custom_command;
pub(crate) mod delete_custom_command;
pub(crate) mod list_custom_commands;
pub(crate) mod update_custom_command;

pub use create_custom_command::{CreateCustomCommandInterface, CreateOutcome};
pub use delete_custom_command::DeleteCustomCommandInterface;
pub use list_custom_commands::ListCustomCommandsInterface;
pub use update_custom_command::{EditKind, UpdateCustomCommandInterface, UpdateOutcome};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    create_custom_command::MockCreateCustomCommandInterface,
    delete_custom_command::MockDeleteCustomCommandInterface,
    list_custom_commands::MockListCustomCommandsInterface,
    update_custom_command::MockUpdateCustomCommandInterface,
};
