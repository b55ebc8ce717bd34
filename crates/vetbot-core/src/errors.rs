//! Logic errors.

use thiserror::Error;

use crate::templates::TemplateError;

/// Logic error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`vetbot_discord_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: vetbot_discord_interface::ApiError,
    },

    /// Wraps [`vetbot_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: vetbot_database_interface::DatabaseError,
    },

    /// Wraps [`crate::templates::TemplateError`].
    #[error("Template error: {source}")]
    TemplateError { source: TemplateError },
}

impl From<vetbot_discord_interface::ApiError> for DomainError {
    fn from(e: vetbot_discord_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<vetbot_database_interface::DatabaseError> for DomainError {
    fn from(e: vetbot_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

impl From<TemplateError> for DomainError {
    fn from(e: TemplateError) -> Self {
        Self::TemplateError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
