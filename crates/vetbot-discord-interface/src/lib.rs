mod errors;
mod interface;

pub use errors::{ApiError, Result};
pub use interface::DiscordService;

#[cfg(feature = "testkit")]
pub use interface::MockDiscordService;
