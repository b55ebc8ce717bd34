//! Custom vetting command configuration: edit-request parsing, the
//! add/remove merge algebra and pre-commit validation.

mod builder;
mod describe;
mod parser;

pub use builder::{ConfigViolation, CustomCommandBuilder, ValidationOutcome};
pub use describe::describe_custom_command;
pub use parser::parse_edit_request;
