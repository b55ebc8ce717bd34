//! Use cases.

pub mod custom;
pub mod guilds;
pub mod messages;
