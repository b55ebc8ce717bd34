//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DatabaseDriver, DriverError};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
}

#[derive(Debug, Clone)]
pub struct DiscordApiConfig {
    /// Discord API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Discord API root URL.
    pub root_url: String,
    /// Discord bot token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// Default command prefix for guilds without an explicit one.
    pub default_prefix: String,
    /// Database options.
    pub database: DatabaseConfig,
    /// Discord API options.
    pub discord: DiscordApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Test debug mode.
    pub test_debug_mode: bool,
    /// App version.
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BOT_NAME", "vetbot"),
            default_prefix: env_to_str("BOT_DEFAULT_PREFIX", "!"),
            database: DatabaseConfig {
                driver: DatabaseDriver::from_str(&env_to_str("BOT_DATABASE_DRIVER", "memory"))
                    .unwrap(),
            },
            discord: DiscordApiConfig {
                connect_timeout: env_to_u64("BOT_DISCORD_CONNECT_TIMEOUT", 5000),
                root_url: env_to_str("BOT_DISCORD_ROOT_URL", "https://discord.com/api"),
                token: env_to_str("BOT_DISCORD_TOKEN", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            test_debug_mode: env_to_bool("BOT_TEST_DEBUG_MODE", false),
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
